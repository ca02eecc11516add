//! Thread-safe service map backing the container port

use csf_domain::{Container, Error, Result, SharedService};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Thread-safe in-memory service container
///
/// Cloning is shallow: clones share the same underlying map, so a factory
/// can hold one clone while the composition root keeps registering services
/// through another.
#[derive(Clone, Default)]
pub struct ServiceMap {
    services: Arc<RwLock<HashMap<String, SharedService>>>,
}

impl ServiceMap {
    /// Create an empty service map
    pub fn new() -> Self {
        Self {
            services: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a shared service under a key
    ///
    /// Keys are write-once; registering a taken key fails with
    /// [`Error::AlreadyRegistered`].
    pub fn register(&self, key: impl Into<String>, service: SharedService) -> Result<()> {
        let key = key.into();
        let mut services = self.write_guard("ServiceMap::register")?;

        if services.contains_key(&key) {
            return Err(Error::already_registered(key));
        }

        debug!(key = %key, "service registered");
        services.insert(key, service);
        Ok(())
    }

    /// Wrap a value in a shared handle and register it
    pub fn register_value<T: Send + Sync + 'static>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<()> {
        self.register(key, Arc::new(value))
    }

    /// List all registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let services = match self.read_guard("ServiceMap::keys") {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        let mut keys: Vec<String> = services.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.read_guard("ServiceMap::len").map_or(0, |s| s.len())
    }

    /// Whether no services are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_guard(
        &self,
        context: &str,
    ) -> Result<RwLockReadGuard<'_, HashMap<String, SharedService>>> {
        self.services
            .read()
            .map_err(|_| Error::internal(format!("RwLock read lock poisoned: {}", context)))
    }

    fn write_guard(
        &self,
        context: &str,
    ) -> Result<RwLockWriteGuard<'_, HashMap<String, SharedService>>> {
        self.services
            .write()
            .map_err(|_| Error::internal(format!("RwLock write lock poisoned: {}", context)))
    }
}

impl Container for ServiceMap {
    fn has(&self, key: &str) -> bool {
        self.read_guard("ServiceMap::has")
            .is_ok_and(|services| services.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<SharedService> {
        let services = self.read_guard("ServiceMap::get")?;
        services
            .get(key)
            .cloned()
            .ok_or_else(|| Error::service_not_found(key))
    }
}

impl std::fmt::Debug for ServiceMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceMap")
            .field("keys", &self.keys())
            .finish()
    }
}
