use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG` environment variable
/// - **stderr output**: stdout belongs to the interactive session
///
/// Without `RUST_LOG` only warnings and errors are shown, which keeps the
/// operator's screen readable.
///
/// # Environment Variables
///
/// - `RUST_LOG=info` - Also show menu loads and finalized orders
/// - `RUST_LOG=buteco=debug` - Debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
