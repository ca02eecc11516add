//! Resolved Configuration Value Objects
//!
//! The output shape of configuration resolution: the same tree as the raw
//! configuration, except that strings naming registered services have been
//! substituted with the service handles fetched from the container.

use crate::error::{Error, Result};
use crate::ports::container::{SharedService, downcast_service};
use std::fmt;
use std::sync::Arc;

/// Value Object: Resolved Configuration Node
///
/// Mirrors [`ConfigValue`](crate::value_objects::ConfigValue) with one
/// addition: the `Service` variant carrying a container-fetched handle.
/// Consumers (typically setter closures) pull the concrete shape back out
/// through the `into_*` converters, which report a
/// [`Error::Value`] naming the actual shape on mismatch.
///
/// Equality is structural; two `Service` nodes are equal only when they
/// hold the same allocation.
pub enum Resolved {
    /// Boolean scalar, passed through unchanged
    Bool(bool),
    /// Integer scalar, passed through unchanged
    Integer(i64),
    /// Floating point scalar, passed through unchanged
    Float(f64),
    /// String scalar that named no registered service
    String(String),
    /// Handle substituted for a string that named a registered service
    Service(SharedService),
    /// Sequence with every element resolved, order preserved
    Sequence(Vec<Resolved>),
    /// Mapping with every value resolved, key order preserved
    Map(Vec<(String, Resolved)>),
}

impl Resolved {
    /// Wrap a concrete service value in a resolved node
    pub fn service<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Service(Arc::new(value))
    }

    /// Get the boolean value if this node is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the integer value if this node is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the float value if this node is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the string value if this node is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get the service handle if this node is a service
    pub fn as_service(&self) -> Option<&SharedService> {
        match self {
            Self::Service(service) => Some(service),
            _ => None,
        }
    }

    /// Get the elements if this node is a sequence
    pub fn as_sequence(&self) -> Option<&[Resolved]> {
        match self {
            Self::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Get the entries if this node is a mapping
    pub fn as_map(&self) -> Option<&[(String, Resolved)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping entry by key
    ///
    /// Returns `None` when this node is not a mapping or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Resolved> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Human-readable name of this node's shape, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Service(_) => "service",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
        }
    }
}

// Consuming converters for setter closures and factory bodies
impl Resolved {
    /// Take the boolean value out of this node
    pub fn into_bool(self) -> Result<bool> {
        match self {
            Self::Bool(value) => Ok(value),
            other => Err(Error::value(format!("expected a bool, got {}", other.kind()))),
        }
    }

    /// Take the integer value out of this node
    pub fn into_integer(self) -> Result<i64> {
        match self {
            Self::Integer(value) => Ok(value),
            other => Err(Error::value(format!(
                "expected an integer, got {}",
                other.kind()
            ))),
        }
    }

    /// Take the float value out of this node
    pub fn into_float(self) -> Result<f64> {
        match self {
            Self::Float(value) => Ok(value),
            other => Err(Error::value(format!(
                "expected a float, got {}",
                other.kind()
            ))),
        }
    }

    /// Take the string value out of this node
    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(value) => Ok(value),
            other => Err(Error::value(format!(
                "expected a string, got {}",
                other.kind()
            ))),
        }
    }

    /// Take the sequence elements out of this node
    pub fn into_sequence(self) -> Result<Vec<Resolved>> {
        match self {
            Self::Sequence(values) => Ok(values),
            other => Err(Error::value(format!(
                "expected a sequence, got {}",
                other.kind()
            ))),
        }
    }

    /// Take the mapping entries out of this node
    pub fn into_map(self) -> Result<Vec<(String, Resolved)>> {
        match self {
            Self::Map(entries) => Ok(entries),
            other => Err(Error::value(format!("expected a map, got {}", other.kind()))),
        }
    }

    /// Take the service handle out of this node, downcast to its concrete type
    ///
    /// # Returns
    /// The typed handle; [`Error::Value`] when the node is not a service,
    /// [`Error::TypeMismatch`] when the handle holds a different type
    pub fn into_service<T: Send + Sync + 'static>(self) -> Result<Arc<T>> {
        match self {
            Self::Service(service) => downcast_service(service),
            other => Err(Error::value(format!(
                "expected a service, got {}",
                other.kind()
            ))),
        }
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::String(value) => f.debug_tuple("String").field(value).finish(),
            Self::Service(_) => f.write_str("Service(..)"),
            Self::Sequence(values) => f.debug_tuple("Sequence").field(values).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}

impl Clone for Resolved {
    fn clone(&self) -> Self {
        match self {
            Self::Bool(value) => Self::Bool(*value),
            Self::Integer(value) => Self::Integer(*value),
            Self::Float(value) => Self::Float(*value),
            Self::String(value) => Self::String(value.clone()),
            Self::Service(service) => Self::Service(Arc::clone(service)),
            Self::Sequence(values) => Self::Sequence(values.clone()),
            Self::Map(entries) => Self::Map(entries.clone()),
        }
    }
}

impl PartialEq for Resolved {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Service(a), Self::Service(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Resolved {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Resolved {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Resolved {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Resolved {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Resolved {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Resolved {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Resolved>> for Resolved {
    fn from(values: Vec<Resolved>) -> Self {
        Self::Sequence(values)
    }
}
