use buteco::runtime::{open_restaurant, setup_tracing, Config, Session};
use clap::Parser;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let config = Config::parse();

    info!(menu = %config.menu_path.display(), orders = %config.orders_path.display(), "Starting");

    let restaurant = open_restaurant(&config);
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    Session::new(restaurant, config.orders_path, stdin, stdout).run()?;
    Ok(())
}
