//! Service Factory Contract
//!
//! The trait concrete factories implement. One factory type covers every
//! named flavor of its service; the [`Variant`] passed at construction
//! decides which flavor a given call builds.

use csf_domain::error::Result;
use csf_domain::ports::container::{Container, SharedService};

use crate::variant::Variant;

/// Contract for configuration-driven service factories
///
/// A factory owns nothing but its variant. `build` reads configuration,
/// resolves collaborators through the container, and returns the finished
/// service as a shared handle; it never registers anything itself.
///
/// The provided constructors are the ergonomic surface: registration code
/// builds one named flavor in a single expression instead of spelling out
/// the variant plumbing.
///
/// # Example
///
/// ```ignore
/// use csf_domain::ports::{Container, SharedService, downcast_service};
/// use csf_domain::value_objects::{ConfigMap, ConfigValue};
/// use csf_domain::Result;
/// use csf_factory::{ServiceFactory, Variant};
/// use std::sync::Arc;
///
/// struct MailerFactory {
///     variant: Variant,
/// }
///
/// impl ServiceFactory for MailerFactory {
///     fn for_variant(variant: Variant) -> Self {
///         Self { variant }
///     }
///
///     fn variant(&self) -> &Variant {
///         &self.variant
///     }
///
///     fn build(&self, container: &dyn Container) -> Result<SharedService> {
///         let raw = downcast_service::<ConfigMap>(container.get("config")?)?;
///         let section = raw
///             .get("mailer")
///             .and_then(ConfigValue::as_map)
///             .cloned()
///             .unwrap_or_default();
///         let config = self.variant().resolve_config(&section);
///         let mailer = self
///             .variant()
///             .apply_setters(container, Mailer::default(), &config, &mailer_setters())?;
///         Ok(Arc::new(mailer))
///     }
/// }
///
/// // Two flavors of the same factory, one expression each
/// let primary = MailerFactory::named("primary", &container)?;
/// let default = MailerFactory::unnamed(&container)?;
/// ```
pub trait ServiceFactory: Sized {
    /// Create a factory bound to the given variant
    fn for_variant(variant: Variant) -> Self;

    /// The variant this factory builds
    fn variant(&self) -> &Variant;

    /// Build the service against the container
    ///
    /// # Arguments
    /// * `container` - The service container for configuration and collaborators
    ///
    /// # Returns
    /// The finished service as a shared handle
    fn build(&self, container: &dyn Container) -> Result<SharedService>;

    /// Build one named flavor in a single expression
    ///
    /// Behaviorally identical to
    /// `Self::for_variant(Variant::new(name)).build(container)`.
    fn named(name: impl Into<String>, container: &dyn Container) -> Result<SharedService> {
        Self::for_variant(Variant::new(name)).build(container)
    }

    /// Build the default flavor in a single expression
    fn unnamed(container: &dyn Container) -> Result<SharedService> {
        Self::for_variant(Variant::unnamed()).build(container)
    }
}
