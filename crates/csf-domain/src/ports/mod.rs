//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! Ports follow the Dependency Inversion Principle:
//! - High-level modules (domain, factory engine) define interfaces
//! - Low-level modules (containers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **container** - The key-value service registry consumed by factories

/// Service container port
pub mod container;

// Re-export commonly used port types for convenience
pub use container::{Container, SharedService, downcast_service};
