//! Named Variant Resolution
//!
//! Resolves services, configuration sections, and configuration values for
//! one named flavor of a service. A single factory type can produce any
//! number of differently-configured instances; the [`Variant`] it holds
//! decides which container keys and which configuration section apply.
//!
//! ## Architecture
//!
//! ```text
//! raw config                          container
//!     │                                   │
//!     ▼                                   │
//! ┌─────────────────────────────┐         │
//! │ resolve_config(&raw)        │         │  narrow raw config to the
//! │   "primary" → raw["primary"]│         │  variant's section
//! └─────────────────────────────┘         │
//!     │                                   │
//!     ▼                                   ▼
//! ┌──────────────────────────────────────────┐
//! │ resolve_value(container, value)          │  substitute strings that
//! │ resolve_dependency::<F>(container, key)  │  name registered services,
//! │ apply_setters(container, obj, cfg, tbl)  │  fetch or build collaborators,
//! └──────────────────────────────────────────┘  push values into the object
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let variant = Variant::new("primary");
//! let section = variant.resolve_config(&raw_mailer_config);
//! let mailer = variant.apply_setters(container, Mailer::default(), &section, &setters)?;
//! ```

use csf_domain::error::{Error, Result};
use csf_domain::ports::container::{Container, SharedService};
use csf_domain::value_objects::{ConfigMap, ConfigValue, Resolved};
use tracing::debug;

use crate::factory::ServiceFactory;
use crate::setters::SetterMap;

/// The named flavor of a service a factory call is building
///
/// A variant is nothing but an immutable name, fixed at construction. The
/// empty name is the default flavor: it leaves container keys untouched and
/// treats the whole configuration section as its own. Any other name
/// suffixes container keys and selects the equally-named nested section.
///
/// # Example
///
/// ```rust
/// use csf_factory::Variant;
///
/// let variant = Variant::new("primary");
/// assert_eq!(variant.keyed("db.connection"), "db.connectionprimary");
/// assert_eq!(Variant::unnamed().keyed("db.connection"), "db.connection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Variant {
    name: String,
}

impl Variant {
    /// Create a variant with the given name
    ///
    /// An empty name produces the default flavor, same as [`Variant::unnamed`].
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create the default, unnamed variant
    pub fn unnamed() -> Self {
        Self {
            name: String::new(),
        }
    }

    /// The variant name; empty for the default flavor
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the default flavor
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Derive the container key for this variant from a base key
    ///
    /// The variant name is appended directly to the base key; the unnamed
    /// variant leaves the base key unchanged. This is the disambiguation
    /// scheme the whole engine rests on: `"db.connection"` for the default
    /// flavor, `"db.connectionprimary"` for the `primary` flavor.
    pub fn keyed(&self, base: &str) -> String {
        format!("{base}{}", self.name)
    }
}

// Resolution operations, in the order a factory typically runs them
impl Variant {
    /// Narrow a raw configuration mapping to this variant's section
    ///
    /// The unnamed variant owns the whole mapping and gets a structural
    /// copy of it. A named variant gets a copy of the nested mapping under
    /// its name; when that key is absent, or present with anything other
    /// than a mapping, the result is an empty mapping. This operation never
    /// fails.
    ///
    /// # Arguments
    /// * `raw` - The configuration mapping covering every variant
    ///
    /// # Returns
    /// The section this variant should be built from
    pub fn resolve_config(&self, raw: &ConfigMap) -> ConfigMap {
        if self.is_unnamed() {
            return raw.clone();
        }
        match raw.get(&self.name) {
            Some(ConfigValue::Map(section)) => section.clone(),
            Some(other) => {
                debug!(
                    variant = %self.name,
                    kind = other.kind(),
                    "variant config entry is not a mapping, using empty section"
                );
                ConfigMap::new()
            }
            None => ConfigMap::new(),
        }
    }

    /// Fetch a collaborator from the container, or build it with a fallback factory
    ///
    /// Consults exactly one container key, the [`keyed`](Variant::keyed)
    /// form of `base_key`. When that key is registered the container's
    /// entry wins, with whatever caching semantics the container gives it.
    /// Otherwise the fallback factory `F` is constructed *with this same
    /// variant* and its product is returned directly; nothing is registered
    /// on the caller's behalf.
    ///
    /// # Arguments
    /// * `container` - The service container to consult
    /// * `base_key` - The collaborator's base key, without variant suffix
    ///
    /// # Returns
    /// The shared service handle; errors from the container or the fallback
    /// factory propagate unchanged
    pub fn resolve_dependency<F: ServiceFactory>(
        &self,
        container: &dyn Container,
        base_key: &str,
    ) -> Result<SharedService> {
        let keyed = self.keyed(base_key);
        if container.has(&keyed) {
            debug!(key = %keyed, "collaborator registered, fetching from container");
            return container.get(&keyed);
        }
        debug!(
            key = %keyed,
            factory = std::any::type_name::<F>(),
            "collaborator not registered, building with fallback factory"
        );
        F::for_variant(self.clone()).build(container)
    }

    /// Resolve one configuration value against the container
    ///
    /// Strings that name a registered service are substituted with the
    /// service handle; all other strings pass through as literals. Other
    /// scalars always pass through. Sequences and mappings are resolved
    /// element by element, preserving order and, for mappings, the key set.
    /// Recursion is ordinary and bounded by the depth of the tree.
    ///
    /// Note the substitution rule cuts both ways: a literal string that
    /// happens to collide with a registered key is silently replaced by the
    /// service. Configuration authors own their key namespace.
    ///
    /// # Arguments
    /// * `container` - The service container to consult for string values
    /// * `value` - The raw configuration node to resolve
    ///
    /// # Returns
    /// The resolved node; container lookup failures propagate unchanged
    pub fn resolve_value(
        &self,
        container: &dyn Container,
        value: &ConfigValue,
    ) -> Result<Resolved> {
        match value {
            ConfigValue::Bool(v) => Ok(Resolved::Bool(*v)),
            ConfigValue::Integer(v) => Ok(Resolved::Integer(*v)),
            ConfigValue::Float(v) => Ok(Resolved::Float(*v)),
            ConfigValue::String(text) => {
                if container.has(text) {
                    debug!(variant = %self.name, key = %text, "substituting registered service for string value");
                    Ok(Resolved::Service(container.get(text)?))
                } else {
                    Ok(Resolved::String(text.clone()))
                }
            }
            ConfigValue::Sequence(values) => {
                let mut resolved = Vec::with_capacity(values.len());
                for element in values {
                    resolved.push(self.resolve_value(container, element)?);
                }
                Ok(Resolved::Sequence(resolved))
            }
            ConfigValue::Map(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, nested) in map.iter() {
                    entries.push((key.to_string(), self.resolve_value(container, nested)?));
                }
                Ok(Resolved::Map(entries))
            }
        }
    }

    /// Push a configuration section into an object through its setter table
    ///
    /// Walks the section in declaration order. For each entry the setter is
    /// looked up first: a key without a setter aborts the whole pass with
    /// [`Error::MissingSetter`] before the entry's value is even resolved,
    /// so no container lookup happens for an unknown key. Entries applied
    /// before the failure stay applied; the object is dropped with the
    /// error. On success the same object is handed back.
    ///
    /// # Arguments
    /// * `container` - The service container for value resolution
    /// * `target` - The object being configured, taken by value
    /// * `config` - The variant's configuration section
    /// * `setters` - The setter table for the target type
    ///
    /// # Returns
    /// The configured object, or the first error encountered
    pub fn apply_setters<T>(
        &self,
        container: &dyn Container,
        mut target: T,
        config: &ConfigMap,
        setters: &SetterMap<T>,
    ) -> Result<T> {
        for (key, value) in config.iter() {
            let setter = setters
                .get(key)
                .ok_or_else(|| Error::missing_setter(key, std::any::type_name::<T>()))?;
            let resolved = self.resolve_value(container, value)?;
            setter(&mut target, resolved)?;
        }
        Ok(target)
    }
}
