//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ConfigValue`] | One node of a raw configuration tree |
//! | [`ConfigMap`] | Ordered string-keyed configuration mapping |
//! | [`Resolved`] | Configuration node after container references were substituted |

/// Raw configuration tree value objects
pub mod config;
/// Resolved configuration value objects
pub mod resolved;

// Re-export commonly used value objects
pub use config::{ConfigMap, ConfigValue};
pub use resolved::Resolved;
