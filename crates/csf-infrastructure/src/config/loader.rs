//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and programmatic defaults, merged through Figment.

use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use csf_domain::{ConfigMap, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
///
/// Produces an ordered [`ConfigMap`] rather than a fixed configuration
/// struct, so the same loader serves any factory layout.
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Programmatic defaults merged below every other source
    defaults: Option<ConfigMap>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            defaults: None,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Set programmatic defaults merged below every other source
    pub fn with_defaults(mut self, defaults: ConfigMap) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Programmatic defaults from [`Self::with_defaults`]
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g. `CSF_SERVER_HOST`)
    ///
    /// Figment merges by key, so entries of the returned map come back sorted
    /// by key rather than in file order. Use [`Self::load_file`] or
    /// [`Self::from_toml_str`] when declaration order must survive.
    pub fn load(&self) -> Result<ConfigMap> {
        let mut figment = Figment::new();

        // Start with programmatic defaults
        if let Some(defaults) = &self.defaults {
            figment = figment.merge(Serialized::defaults(defaults.clone()));
        }

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Add environment variables
        // Uses underscore as separator for nested keys (e.g. CSF_SERVER_HOST -> server.host)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let config: ConfigMap = figment
            .extract()
            .context("Failed to extract configuration")?;

        Ok(config)
    }

    /// Reload configuration from the same sources
    pub fn reload(&self) -> Result<ConfigMap> {
        self.load()
    }

    /// Parse a TOML document into a configuration map, keeping declaration order
    pub fn from_toml_str(document: &str) -> Result<ConfigMap> {
        toml::from_str(document).context("Failed to parse TOML configuration")
    }

    /// Read and parse a single TOML file, keeping declaration order
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)
            .io_context(format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&document)
    }

    /// Save a configuration map to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(config: &ConfigMap, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first default configuration file that exists
///
/// Checks the working directory, the working directory's `csf/` subdirectory,
/// the platform config directory, and a dotted directory under home.
pub fn find_default_config_path() -> Option<PathBuf> {
    let current_dir = env::current_dir().ok()?;

    let candidates = vec![
        current_dir.join(DEFAULT_CONFIG_FILENAME),
        current_dir
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILENAME),
        dirs::config_dir()
            .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
            .unwrap_or_default(),
        dirs::home_dir()
            .map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            })
            .unwrap_or_default(),
    ];

    candidates.into_iter().find(|path| path.exists())
}
