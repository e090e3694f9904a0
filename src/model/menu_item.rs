//! Menu items and the category that decides how they are priced.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::format_brl;

/// Multiplier applied to the base price of beverages.
pub const SERVICE_SURCHARGE: f64 = 1.10;

/// Category of a menu item.
///
/// Serialized with the tags used by the menu file (`Bebida`, `Comida`, `Sobremesa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "Bebida")]
    Beverage,
    #[serde(rename = "Comida")]
    Food,
    #[serde(rename = "Sobremesa")]
    Dessert,
}

impl ItemKind {
    /// Factor applied to the base price of items of this kind.
    pub fn price_factor(self) -> f64 {
        match self {
            ItemKind::Beverage => SERVICE_SURCHARGE,
            ItemKind::Food | ItemKind::Dessert => 1.0,
        }
    }

    /// Tag used for this kind in the menu file.
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Beverage => "Bebida",
            ItemKind::Food => "Comida",
            ItemKind::Dessert => "Sobremesa",
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Represents a sellable item on the menu.
///
/// # Pricing
/// Every item carries an [`ItemKind`] fixed at construction time. The kind drives
/// the only pricing rule in the system: beverages carry a 10% service surcharge,
/// food and desserts are sold at their base price.
///
/// Items are immutable once built. See [`MenuItem::effective_price`] and [`MenuItem::describe`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    kind: ItemKind,
    name: String,
    price: f64,
    description: String,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `kind` - Category that selects the pricing rule
    /// * `name` - Display name
    /// * `price` - Base price before any surcharge
    /// * `description` - Free-form description shown in the full menu listing
    pub fn new(
        kind: ItemKind,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    pub fn beverage(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Beverage, name, price, description)
    }

    pub fn food(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Food, name, price, description)
    }

    pub fn dessert(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self::new(ItemKind::Dessert, name, price, description)
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base price, before the category surcharge.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price charged for this item once the category rule is applied.
    ///
    /// Kept at full precision; rounding happens only when formatting.
    pub fn effective_price(&self) -> f64 {
        self.price * self.kind.price_factor()
    }

    /// Renders the item as a single display line.
    ///
    /// The line always shows the base price. With `include_description` the
    /// description is appended as a third column.
    pub fn describe(&self, include_description: bool) -> String {
        let line = format!("Item: {} | Preço: {}", self.name, format_brl(self.price));
        if include_description {
            format!("{} | Descrição: {}", line, self.description)
        } else {
            line
        }
    }
}
