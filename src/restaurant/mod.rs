//! # Restaurant
//!
//! The aggregate that owns the menu and the history of finalized orders.
//!
//! ## Structure
//!
//! - [`Restaurant`] - menu management, order finalization and persistence
//! - [`error`] - [`RestaurantError`] for load and persist failures
//! - [`storage`] - menu file and orders file formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use buteco::model::{MenuItem, Order};
//! use buteco::restaurant::Restaurant;
//!
//! let mut restaurant = Restaurant::new();
//! restaurant.add_menu_item(MenuItem::beverage("Coca-Cola", 5.0, "Refrigerante gelado"));
//!
//! let mut order = Order::new();
//! if let Some(item) = restaurant.menu_item(1) {
//!     order.add_item(item.clone());
//! }
//! restaurant.finalize_order(&order);
//! restaurant.persist_orders("pedidos.json")?;
//! order.clear();
//! # Ok::<(), buteco::restaurant::RestaurantError>(())
//! ```

pub mod error;
pub mod storage;

pub use error::*;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::model::{FinalizedOrder, MenuItem, Order};

/// Outcome of a successful [`Restaurant::load_menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuLoadReport {
    /// Records appended to the menu.
    pub loaded: usize,
    /// Malformed records that were skipped.
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct Restaurant {
    menu: Vec<Arc<MenuItem>>,
    finalized_orders: Vec<FinalizedOrder>,
}

impl Restaurant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the menu and returns its 1-based position.
    pub fn add_menu_item(&mut self, item: MenuItem) -> usize {
        debug!(name = %item.name(), kind = %item.kind(), "Adding menu item");
        self.menu.push(Arc::new(item));
        self.menu.len()
    }

    /// Read-only view of the menu in insertion order.
    pub fn menu_items(&self) -> &[Arc<MenuItem>] {
        &self.menu
    }

    /// Looks up a menu item by its 1-based position.
    pub fn menu_item(&self, index: usize) -> Option<&Arc<MenuItem>> {
        index.checked_sub(1).and_then(|i| self.menu.get(i))
    }

    /// Full-detail listing of the menu, one numbered line per item.
    pub fn render_menu(&self) -> String {
        self.menu
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.describe(true)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Appends every well-formed record of the menu file at `path` to the menu.
    ///
    /// # Errors
    /// - [`RestaurantError::MenuFileNotFound`] if the file does not exist
    /// - [`RestaurantError::MenuRead`] for any other read failure
    /// - [`RestaurantError::MalformedMenu`] if the file is not a JSON array
    ///
    /// In every error case the menu is left unchanged. Individual malformed
    /// records are skipped and counted in the returned report.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_menu(&mut self, path: impl AsRef<Path>) -> Result<MenuLoadReport, RestaurantError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                warn!("Menu file not found");
                RestaurantError::MenuFileNotFound { path: path.to_path_buf() }
            } else {
                warn!(error = %source, "Menu file could not be read");
                RestaurantError::MenuRead { path: path.to_path_buf(), source }
            }
        })?;

        let decoded = storage::decode_menu(&contents).map_err(|source| {
            warn!(error = %source, "Menu file is malformed");
            RestaurantError::MalformedMenu { path: path.to_path_buf(), source }
        })?;

        for skipped in &decoded.skipped {
            warn!(position = skipped.position, reason = %skipped.reason, "Skipping menu record");
        }

        let report = MenuLoadReport {
            loaded: decoded.items.len(),
            skipped: decoded.skipped.len(),
        };
        for item in decoded.items {
            self.add_menu_item(item);
        }

        info!(loaded = report.loaded, skipped = report.skipped, "Menu loaded");
        Ok(report)
    }

    /// Records a snapshot of `order` in the finalized history.
    ///
    /// The order itself is not touched; clearing it is up to the caller.
    pub fn finalize_order(&mut self, order: &Order) -> &FinalizedOrder {
        let snapshot = order.snapshot();
        info!(lines = snapshot.items.len(), total = snapshot.total, "Order finalized");
        self.finalized_orders.push(snapshot);
        &self.finalized_orders[self.finalized_orders.len() - 1]
    }

    /// Every order finalized during this run, oldest first.
    pub fn finalized_orders(&self) -> &[FinalizedOrder] {
        &self.finalized_orders
    }

    /// Writes the complete finalized history to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`RestaurantError::Persistence`] if the file cannot be written. The
    /// history stays in memory, so the next successful call writes it in full.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), orders = self.finalized_orders.len()))]
    pub fn persist_orders(&self, path: impl AsRef<Path>) -> Result<(), RestaurantError> {
        let path = path.as_ref();
        let data = storage::encode_orders(&self.finalized_orders)?;

        storage::write_atomic(path, &data).map_err(|source| {
            warn!(error = %source, "Failed to persist orders");
            RestaurantError::Persistence { path: path.to_path_buf(), source }
        })?;

        debug!(bytes = data.len(), "Orders persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_restaurant() -> Restaurant {
        let mut restaurant = Restaurant::new();
        restaurant.add_menu_item(MenuItem::beverage("Coca-Cola", 5.0, "Refrigerante gelado"));
        restaurant.add_menu_item(MenuItem::food("X-salada", 40.0, "Pão brioche"));
        restaurant
    }

    #[test]
    fn add_menu_item_returns_one_based_index() {
        let mut restaurant = Restaurant::new();
        assert_eq!(restaurant.add_menu_item(MenuItem::food("A", 1.0, "a")), 1);
        assert_eq!(restaurant.add_menu_item(MenuItem::food("B", 2.0, "b")), 2);
        assert_eq!(restaurant.menu_items().len(), 2);
    }

    #[test]
    fn menu_item_lookup_is_one_based() {
        let restaurant = sample_restaurant();
        assert!(restaurant.menu_item(0).is_none());
        assert_eq!(restaurant.menu_item(1).unwrap().name(), "Coca-Cola");
        assert_eq!(restaurant.menu_item(2).unwrap().name(), "X-salada");
        assert!(restaurant.menu_item(3).is_none());
    }

    #[test]
    fn render_menu_numbers_items_with_full_detail() {
        let restaurant = sample_restaurant();
        assert_eq!(
            restaurant.render_menu(),
            "1. Item: Coca-Cola | Preço: R$5.00 | Descrição: Refrigerante gelado\n\
             2. Item: X-salada | Preço: R$40.00 | Descrição: Pão brioche"
        );
    }

    #[test]
    fn finalize_does_not_mutate_order() {
        let mut restaurant = sample_restaurant();
        let mut order = Order::new();
        order.add_item(restaurant.menu_item(1).unwrap().clone());

        let snapshot = restaurant.finalize_order(&order).clone();

        assert_eq!(order.len(), 1);
        assert_eq!(snapshot.items, vec!["Item: Coca-Cola | Preço: R$5.00".to_string()]);
        assert_eq!(restaurant.finalized_orders().len(), 1);
    }

    #[test]
    fn missing_menu_file_leaves_menu_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut restaurant = sample_restaurant();

        let result = restaurant.load_menu(dir.path().join("menu.json"));

        assert!(matches!(result, Err(RestaurantError::MenuFileNotFound { .. })));
        assert_eq!(restaurant.menu_items().len(), 2);
    }
}
