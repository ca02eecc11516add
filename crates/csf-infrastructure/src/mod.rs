//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the factory and domain layers.
//!
//! This layer owns everything that touches the environment: configuration
//! files, environment variables, log output, and the in-memory service
//! container that backs the [`csf_domain::Container`] port.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Container
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Thread-safe in-memory service container |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Error Handling
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension methods for domain errors |

// Core infrastructure modules
pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, LoggingConfig};
pub use container::ServiceMap;
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
