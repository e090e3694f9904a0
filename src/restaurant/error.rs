//! Error types for the Restaurant aggregate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the menu or persisting orders.
#[derive(Debug, Error)]
pub enum RestaurantError {
    /// The menu file does not exist. Recoverable: the menu is left unchanged.
    #[error("Menu file not found: {}", path.display())]
    MenuFileNotFound { path: PathBuf },

    /// The menu file exists but could not be read.
    #[error("Failed to read menu file {}: {source}", path.display())]
    MenuRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file is not a JSON array of records.
    #[error("Malformed menu file {}: {source}", path.display())]
    MalformedMenu {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the orders file failed. Finalized orders remain in memory.
    #[error("Failed to persist orders to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
