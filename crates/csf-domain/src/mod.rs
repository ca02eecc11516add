//! Domain Layer - Config Service Factory
//!
//! This crate contains the domain layer of the Config Service Factory,
//! defining the core types and contracts that the factory engine and the
//! infrastructure layer build on.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the error taxonomy shared by every layer
//! - Defines the configuration value objects (ordered trees of scalars,
//!   sequences, and mappings)
//! - Defines the resolved value shape produced by configuration resolution
//! - Defines the container port that external service registries implement
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Value Objects
//!
//! - [`ConfigValue`] / [`ConfigMap`]: raw configuration trees with stable
//!   key order
//! - [`Resolved`]: configuration trees after container references have been
//!   substituted with service handles
//!
//! ## Ports (Interfaces)
//!
//! - [`Container`]: the key-value service registry contract consumed by the
//!   factory engine. Implementations live outside this crate.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Container, SharedService, downcast_service};
pub use value_objects::{ConfigMap, ConfigValue, Resolved};
