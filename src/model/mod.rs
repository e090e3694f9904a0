//! Pure data structures: menu items, the live order and finalized order snapshots.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;

/// Formats an amount the way every surface of the restaurant shows money.
pub fn format_brl(amount: f64) -> String {
    format!("R${:.2}", amount)
}
