use tracing::{info, warn};

use super::{seed, Config};
use crate::restaurant::Restaurant;

/// Builds the restaurant for a session.
///
/// The menu file is tried first. If it is missing, unreadable or yields no
/// items, the built-in menu is used unless `config.no_seed` is set. Load
/// failures are logged and never abort startup.
pub fn open_restaurant(config: &Config) -> Restaurant {
    let mut restaurant = Restaurant::new();

    let loaded = match restaurant.load_menu(&config.menu_path) {
        Ok(report) => report.loaded,
        Err(e) => {
            warn!(error = %e, "Menu file unavailable");
            0
        }
    };

    if loaded == 0 && !config.no_seed {
        info!("Using built-in menu");
        for item in seed::default_menu() {
            restaurant.add_menu_item(item);
        }
    }

    restaurant
}
