//! Factory Engine - Config Service Factory
//!
//! This crate contains the resolution engine of the Config Service Factory:
//! everything a configuration-driven factory needs to build one named
//! flavor of a service against a dependency-injection container.
//!
//! ## Architecture
//!
//! The engine is deliberately small:
//! - [`Variant`] carries the name of the flavor being built and offers the
//!   four resolution operations factories compose
//! - [`SetterMap`] is the explicit, typed replacement for reflective setter
//!   dispatch: one table of setter closures per configurable type
//! - [`ServiceFactory`] is the contract concrete factories implement; its
//!   provided constructors give one-expression access to named flavors
//!
//! The engine holds no state of its own. Each factory invocation owns its
//! variant, reads the configuration tree it is handed, and leaves all
//! caching and lifecycle decisions to the container behind the
//! [`Container`](csf_domain::ports::Container) port.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `csf-domain`: errors, configuration value objects, and the container port
//! - `tracing` for resolution-time diagnostics

pub mod factory;
pub mod setters;
pub mod variant;

pub use factory::*;
pub use setters::*;
pub use variant::*;
