//! Service Container Port
//!
//! Port for the dependency-injection container the factory engine consults.
//! The engine only ever asks two questions of a container: "is this key
//! registered?" and "give me the service under this key". Registration,
//! caching, singleton semantics, and lifecycle all stay behind this
//! boundary and belong to the implementation.

use crate::error::{Error, Result};
use std::any::Any;
use std::sync::Arc;

/// Shared handle to a constructed service
///
/// Services are type-erased so heterogeneous instances can live in one
/// registry; consumers recover the concrete type with
/// [`downcast_service`].
pub type SharedService = Arc<dyn Any + Send + Sync>;

/// Port: Service Container
///
/// Defines the contract for key-value service registries. Whether `get`
/// constructs lazily, caches, or returns shared singletons is entirely up
/// to the implementation; the factory engine treats both operations as
/// opaque.
///
/// # Example
///
/// ```ignore
/// use csf_domain::ports::Container;
///
/// if container.has("logger") {
///     let logger = container.get("logger")?;
/// }
/// ```
pub trait Container: Send + Sync {
    /// Check whether a service key is registered
    ///
    /// # Arguments
    /// * `key` - The service key to probe
    fn has(&self, key: &str) -> bool;

    /// Fetch the service registered under a key
    ///
    /// # Arguments
    /// * `key` - The service key to fetch
    ///
    /// # Returns
    /// The shared service handle, or [`Error::ServiceNotFound`] when the
    /// key is unknown
    fn get(&self, key: &str) -> Result<SharedService>;
}

/// Downcast a shared service handle to its concrete type
///
/// # Arguments
/// * `service` - The type-erased handle taken from a container
///
/// # Returns
/// The typed handle, or [`Error::TypeMismatch`] naming the requested type
/// when the handle holds something else
///
/// # Example
///
/// ```ignore
/// use csf_domain::ports::downcast_service;
///
/// let pool = downcast_service::<ConnectionPool>(container.get("db.pool")?)?;
/// ```
pub fn downcast_service<T: Send + Sync + 'static>(service: SharedService) -> Result<Arc<T>> {
    service
        .downcast::<T>()
        .map_err(|_| Error::type_mismatch(std::any::type_name::<T>()))
}
