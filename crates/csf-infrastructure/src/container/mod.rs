//! In-memory service container
//!
//! Implements the [`csf_domain::Container`] port over a thread-safe map.

pub mod service_map;

pub use service_map::ServiceMap;
