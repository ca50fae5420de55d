pub mod display;
pub mod gameplay;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

pub use display::{DisplayConfig, TitleColor};
pub use gameplay::{DifficultyConfig, GameplayConfig};

// Global configuration instance with thread-safe access
pub static CONFIG: once_cell::sync::Lazy<Arc<RwLock<Config>>> =
    once_cell::sync::Lazy::new(|| Arc::new(RwLock::new(Config::default())));

// Time to wait between checking for config file changes
const CONFIG_CHECK_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gameplay: GameplayConfig,
    pub difficulty: DifficultyConfig,
    pub display: DisplayConfig,
    #[serde(skip)]
    last_checked: Option<Instant>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gameplay: GameplayConfig::default(),
            difficulty: DifficultyConfig::default(),
            display: DisplayConfig::default(),
            last_checked: Some(Instant::now()),
        }
    }
}

impl Config {
    /// Snapshot of the global configuration.
    #[must_use]
    pub fn current() -> Config {
        CONFIG
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the global configuration.
    pub fn install(config: Config) {
        let mut global = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
        *global = config;
        global.last_checked = Some(Instant::now());
    }

    // Check if the config needs to be reloaded and reload if necessary
    pub fn check_and_reload() -> bool {
        let now = Instant::now();
        let should_check = {
            let config = CONFIG.read().unwrap_or_else(PoisonError::into_inner);
            config
                .last_checked
                .is_none_or(|last| now.duration_since(last) > CONFIG_CHECK_INTERVAL)
        };

        if !should_check {
            return false;
        }

        match loader::load_config_from_file() {
            Ok(new_config) => {
                Self::install(new_config);
                true
            }
            Err(e) => {
                log::warn!("Config reload failed: {e}");
                let mut config = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
                config.last_checked = Some(now);
                false
            }
        }
    }
}
