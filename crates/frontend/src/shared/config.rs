//! Console configuration embedded from `config.toml`.

use client::{load_config, ConsoleConfig};
use once_cell::sync::Lazy;

pub static CONFIG: Lazy<ConsoleConfig> = Lazy::new(|| {
    load_config(Some(include_str!("../../config.toml"))).unwrap_or_else(|e| {
        log::error!("Failed to load console configuration: {}", e);
        ConsoleConfig::default()
    })
});
