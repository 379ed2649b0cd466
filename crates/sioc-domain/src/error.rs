//! Error handling types

use crate::constants::DEPENDENCY_CHAIN_SEPARATOR;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SIOC container
///
/// Every variant is terminal for the call that produced it. None of them
/// leave a partially constructed bean in the container.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog lists the same bean name more than once
    #[error("Bean definitions are not unique: '{name}' is declared more than once")]
    DuplicateBeanName {
        /// First name found to be duplicated
        name: String,
    },

    /// Requested (or derived dependency) name has no catalog entry
    #[error("Unknown bean: '{name}'")]
    UnknownBean {
        /// The name that could not be found
        name: String,
    },

    /// The bean type does not declare exactly one constructor
    #[error("Bean '{bean}' must declare exactly one constructor, found {count}")]
    AmbiguousConstructor {
        /// Bean whose type was inspected
        bean: String,
        /// Number of constructors declared
        count: usize,
    },

    /// An instance does not have the requested or declared type
    #[error("Invalid bean type for '{bean}': expected {expected}, found {actual}")]
    TypeMismatch {
        /// Bean (or dependency slot) being checked
        bean: String,
        /// Type that was required
        expected: String,
        /// Type that was found
        actual: String,
    },

    /// Resolution revisited a bean already on the dependency path
    #[error("Circular dependency detected: {chain}")]
    CircularDependency {
        /// Dependency path, e.g. `a -> b -> a`
        chain: String,
    },

    /// A bean name failed validation
    #[error("Invalid bean name: {message}")]
    InvalidBeanName {
        /// Description of the problem
        message: String,
    },

    /// A bean factory reported a failure
    #[error("Failed to construct bean '{bean}': {message}")]
    Construction {
        /// Bean being constructed
        bean: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
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

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a duplicate bean name error
    pub fn duplicate_bean_name<S: Into<String>>(name: S) -> Self {
        Self::DuplicateBeanName { name: name.into() }
    }

    /// Create an unknown bean error
    pub fn unknown_bean<S: Into<String>>(name: S) -> Self {
        Self::UnknownBean { name: name.into() }
    }

    /// Create an ambiguous constructor error
    pub fn ambiguous_constructor<S: Into<String>>(bean: S, count: usize) -> Self {
        Self::AmbiguousConstructor {
            bean: bean.into(),
            count,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<B, E, A>(bean: B, expected: E, actual: A) -> Self
    where
        B: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::TypeMismatch {
            bean: bean.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a circular dependency error from the resolution path
    pub fn circular_dependency<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = path
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(DEPENDENCY_CHAIN_SEPARATOR);
        Self::CircularDependency { chain }
    }

    /// Create an invalid bean name error
    pub fn invalid_bean_name<S: Into<String>>(message: S) -> Self {
        Self::InvalidBeanName {
            message: message.into(),
        }
    }
}

// Construction error creation methods
impl Error {
    /// Create a construction error
    pub fn construction<B: Into<String>, S: Into<String>>(bean: B, message: S) -> Self {
        Self::Construction {
            bean: bean.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error with source
    pub fn construction_with_source<B, S, E>(bean: B, message: S, source: E) -> Self
    where
        B: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Construction {
            bean: bean.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
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

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Whether the error came out of bean resolution rather than setup
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateBeanName { .. }
                | Self::UnknownBean { .. }
                | Self::AmbiguousConstructor { .. }
                | Self::TypeMismatch { .. }
                | Self::CircularDependency { .. }
                | Self::Construction { .. }
        )
    }
}
