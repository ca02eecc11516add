//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Config Service Factory
#[derive(Error, Debug)]
pub enum Error {
    /// No setter is registered for a configuration key during setter application
    #[error("No setter for configuration key '{key}' on {target}")]
    MissingSetter {
        /// The configuration key without a matching setter
        key: String,
        /// Type name of the object being configured
        target: String,
    },

    /// A container lookup failed for the given key
    #[error("Service not found: {key}")]
    ServiceNotFound {
        /// The key that was not registered
        key: String,
    },

    /// A service key was registered twice
    #[error("Service already registered: {key}")]
    AlreadyRegistered {
        /// The key that was already taken
        key: String,
    },

    /// A service handle could not be downcast to the requested type
    #[error("Type mismatch: expected {expected}")]
    TypeMismatch {
        /// Type name the caller asked for
        expected: String,
    },

    /// A resolved value did not have the shape the consumer expected
    #[error("Value error: {message}")]
    Value {
        /// Description of the shape mismatch
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a missing setter error
    pub fn missing_setter<K: Into<String>, T: Into<String>>(key: K, target: T) -> Self {
        Self::MissingSetter {
            key: key.into(),
            target: target.into(),
        }
    }

    /// Create a service not found error
    pub fn service_not_found<S: Into<String>>(key: S) -> Self {
        Self::ServiceNotFound { key: key.into() }
    }

    /// Create an already registered error
    pub fn already_registered<S: Into<String>>(key: S) -> Self {
        Self::AlreadyRegistered { key: key.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(expected: S) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
        }
    }

    /// Create a value shape error
    pub fn value<S: Into<String>>(message: S) -> Self {
        Self::Value {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
