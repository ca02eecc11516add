//! Typed Setter Tables
//!
//! The explicit replacement for reflective setter dispatch. Each
//! configurable type declares one [`SetterMap`] mapping configuration keys
//! to closures that know how to push a resolved value into the object.
//! What used to be an implicit naming convention becomes a table the
//! compiler can see.

use csf_domain::error::Result;
use csf_domain::value_objects::Resolved;
use std::collections::HashMap;
use std::fmt;

/// Boxed setter closure for one configuration key
///
/// Receives the object under construction and the already-resolved value.
/// Setters reject wrongly-shaped values with
/// [`Error::Value`](csf_domain::Error::Value), usually by leaning on the
/// `Resolved::into_*` converters.
pub type Setter<T> = Box<dyn Fn(&mut T, Resolved) -> Result<()> + Send + Sync>;

/// Table of configuration setters for one target type
///
/// Built once per configurable type, typically in the factory module that
/// constructs it. Lookup is by configuration key; application order is
/// decided by the configuration mapping, not by this table.
///
/// # Example
///
/// ```ignore
/// use csf_factory::SetterMap;
///
/// let setters = SetterMap::new()
///     .with("transport", |mailer: &mut Mailer, value| {
///         mailer.transport = value.into_string()?;
///         Ok(())
///     })
///     .with("retries", |mailer: &mut Mailer, value| {
///         mailer.retries = value.into_integer()?;
///         Ok(())
///     });
/// ```
pub struct SetterMap<T> {
    setters: HashMap<String, Setter<T>>,
}

impl<T> SetterMap<T> {
    /// Create an empty setter table
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// Add a setter for a configuration key, returning the table
    pub fn with(
        mut self,
        key: impl Into<String>,
        setter: impl Fn(&mut T, Resolved) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.insert(key, setter);
        self
    }

    /// Add a setter for a configuration key
    ///
    /// A second setter under the same key replaces the first.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        setter: impl Fn(&mut T, Resolved) -> Result<()> + Send + Sync + 'static,
    ) {
        self.setters.insert(key.into(), Box::new(setter));
    }

    /// Look up the setter for a configuration key
    pub fn get(&self, key: &str) -> Option<&Setter<T>> {
        self.setters.get(key)
    }

    /// Check whether a key has a setter
    pub fn contains_key(&self, key: &str) -> bool {
        self.setters.contains_key(key)
    }

    /// Number of registered setters
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Whether the table has no setters
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl<T> Default for SetterMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SetterMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.setters.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("SetterMap")
            .field("target", &std::any::type_name::<T>())
            .field("keys", &keys)
            .finish()
    }
}
