//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for the order tool.
///
/// Every option can also be set through the environment, which is how the
/// tool is usually configured behind a counter terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "buteco")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Order management for the Buteco do Bartho counter")]
pub struct Config {
    /// Menu definition file read at startup
    #[arg(long = "menu", env = "BUTECO_MENU", default_value = "menu.json")]
    pub menu_path: PathBuf,

    /// File that receives the full history of finalized orders
    #[arg(long = "orders", env = "BUTECO_ORDERS", default_value = "pedidos.json")]
    pub orders_path: PathBuf,

    /// Do not fall back to the built-in menu when the menu file yields nothing
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    /// Configuration pointing at explicit files, with the fallback menu enabled.
    pub fn new(menu_path: impl Into<PathBuf>, orders_path: impl Into<PathBuf>) -> Self {
        Self {
            menu_path: menu_path.into(),
            orders_path: orders_path.into(),
            no_seed: false,
        }
    }
}
