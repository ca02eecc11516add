//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "csf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "csf";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CSF";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Container key under which the application configuration map is registered
pub const CONFIG_SERVICE_KEY: &str = "config";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for a tracing filter directive
pub const LOG_ENV_FILTER: &str = "CSF_LOG";
