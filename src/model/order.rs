//! The live order being built during a session and the snapshots taken when it is finalized.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{format_brl, MenuItem};

/// A customer order under construction.
///
/// Lines are shared handles into the restaurant menu, kept in insertion order.
/// The same item may appear any number of times.
#[derive(Debug, Clone, Default)]
pub struct Order {
    lines: Vec<Arc<MenuItem>>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the order.
    pub fn add_item(&mut self, item: Arc<MenuItem>) {
        self.lines.push(item);
    }

    /// Read-only view of the order lines.
    pub fn lines(&self) -> &[Arc<MenuItem>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the effective price of every line; zero for an empty order.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .fold(0.0, |acc, item| acc + item.effective_price())
    }

    /// One short line per item followed by the order total.
    pub fn render(&self) -> String {
        let total = format!("Total do pedido: {}", format_brl(self.total()));
        if self.lines.is_empty() {
            return total;
        }
        let details: Vec<String> = self.lines.iter().map(|item| item.describe(false)).collect();
        format!("{}\n{}", details.join("\n"), total)
    }

    /// Empties the order. Snapshots taken earlier are independent copies and stay intact.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Captures the current contents and total as an immutable record.
    pub fn snapshot(&self) -> FinalizedOrder {
        FinalizedOrder {
            items: self.lines.iter().map(|item| item.describe(false)).collect(),
            total: self.total(),
        }
    }
}

/// An order as it was at the moment it was finalized.
///
/// This is also the record shape of the orders file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedOrder {
    pub items: Vec<String>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coke() -> Arc<MenuItem> {
        Arc::new(MenuItem::beverage("Coca-Cola", 5.0, "Refrigerante gelado"))
    }

    fn burger() -> Arc<MenuItem> {
        Arc::new(MenuItem::food("X-salada", 40.0, "Pão brioche"))
    }

    #[test]
    fn empty_order_totals_zero() {
        let order = Order::new();
        assert_eq!(order.total(), 0.0);
        assert!(!order.total().is_sign_negative());
        assert!(order.is_empty());
        assert_eq!(order.render(), "Total do pedido: R$0.00");
    }

    #[test]
    fn total_sums_effective_prices_including_repeats() {
        let mut order = Order::new();
        let coke = coke();
        order.add_item(coke.clone());
        order.add_item(burger());
        order.add_item(coke.clone());

        let expected = 2.0 * coke.effective_price() + 40.0;
        assert!((order.total() - expected).abs() < 1e-9);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn beverage_and_food_scenario_totals_45_50() {
        let mut order = Order::new();
        order.add_item(coke());
        order.add_item(burger());
        assert!((order.total() - 45.50).abs() < 1e-9);
    }

    #[test]
    fn render_lists_lines_in_insertion_order_then_total() {
        let mut order = Order::new();
        order.add_item(burger());
        order.add_item(coke());
        assert_eq!(
            order.render(),
            "Item: X-salada | Preço: R$40.00\nItem: Coca-Cola | Preço: R$5.00\nTotal do pedido: R$45.50"
        );
    }

    #[test]
    fn clear_resets_lines_but_not_snapshots() {
        let mut order = Order::new();
        order.add_item(coke());
        let snapshot = order.snapshot();

        order.clear();

        assert_eq!(order.total(), 0.0);
        assert!(!order.total().is_sign_negative());
        assert_eq!(order.render(), "Total do pedido: R$0.00");
        assert_eq!(order.snapshot().total.to_bits(), 0.0f64.to_bits());
        assert_eq!(snapshot.items, vec!["Item: Coca-Cola | Preço: R$5.00".to_string()]);
        assert!((snapshot.total - 5.5).abs() < 1e-9);
    }
}
