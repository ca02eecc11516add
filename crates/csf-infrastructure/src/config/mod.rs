//! Configuration loading and configuration data types
//!
//! The loader produces an ordered [`ConfigMap`] rather than a fixed struct:
//! consumers that need typed sections (such as [`LoggingConfig`]) read them
//! out of the map explicitly.

pub mod loader;

pub use loader::{ConfigLoader, find_default_config_path};

use csf_domain::{ConfigMap, ConfigValue};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level directive: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON-formatted log lines instead of human-readable ones
    #[serde(default)]
    pub json_format: bool,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Read the `logging` section of a configuration map
    ///
    /// A missing section or missing keys fall back to the defaults.
    pub fn from_map(config: &ConfigMap) -> Self {
        let defaults = Self::default();
        let Some(ConfigValue::Map(section)) = config.get("logging") else {
            return defaults;
        };
        Self {
            level: section
                .get("level")
                .and_then(ConfigValue::as_str)
                .map_or(defaults.level, str::to_string),
            json_format: section
                .get("json_format")
                .and_then(ConfigValue::as_bool)
                .unwrap_or(defaults.json_format),
        }
    }
}
