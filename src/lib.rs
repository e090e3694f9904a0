//! # Buteco
//!
//! > **Order management for a small restaurant counter.**
//!
//! This crate keeps a menu of items, lets an operator build an order from it,
//! computes totals and writes every finalized order to a JSON file.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Model ([`model`])
//! Pure data with no I/O.
//! - **Key items**: [`MenuItem`](model::MenuItem), [`ItemKind`](model::ItemKind),
//!   [`Order`](model::Order), [`FinalizedOrder`](model::FinalizedOrder).
//! - Pricing lives on [`ItemKind`](model::ItemKind): beverages carry a 10% service
//!   surcharge, food and desserts do not.
//!
//! ### 2. The Aggregate ([`restaurant`])
//! Owns the menu and the history of finalized orders.
//! - **Key items**: [`Restaurant`](restaurant::Restaurant),
//!   [`RestaurantError`](restaurant::RestaurantError).
//! - Menu files are loaded record by record; malformed records are skipped and counted.
//! - The orders file is rewritten in full, atomically, on every persist.
//!
//! ### 3. The Runtime ([`runtime`])
//! Configuration, logging setup, the built-in fallback menu and the interactive
//! [`Session`](runtime::Session) used by the binary.
//!
//! ## Error Handling
//! Each layer has its own `thiserror` enum. Missing menu files and bad selections
//! are recoverable and reported to the operator; a failed persist is returned to
//! the caller while the finalized orders stay in memory for the next write.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with the built-in menu and info logs on stderr
//! RUST_LOG=info cargo run
//!
//! # Use a specific menu file
//! cargo run -- --menu menu.json --orders pedidos.json
//! ```

pub mod model;
pub mod restaurant;
pub mod runtime;
