//! Runtime wiring around the restaurant core.
//!
//! This module contains everything needed to run the tool as an interactive program:
//!
//! - **Configuration**: file locations from the command line or environment ([`Config`])
//! - **Startup**: loading the menu with a built-in fallback ([`open_restaurant`])
//! - **Observability setup**: initializing tracing and logging ([`setup_tracing`])
//! - **Interactive session**: the text loop that drives orders ([`Session`])
//!
//! The core types in [`crate::model`] and [`crate::restaurant`] never depend on
//! anything in here.

pub mod config;
pub mod logging;
pub mod seed;
pub mod session;
pub mod startup;

pub use config::*;
pub use logging::*;
pub use session::*;
pub use startup::*;
