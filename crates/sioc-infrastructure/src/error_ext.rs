//! Error context for setup failures
//!
//! Config extraction, TOML serialization, file writes and subscriber
//! installation fail with foreign error types. [`ErrorContext`] folds them
//! into the domain [`Error`], prefixing the message and keeping the
//! original as the source.

use sioc_domain::error::{Error, Result};
use std::fmt;

type Source = Option<Box<dyn std::error::Error + Send + Sync>>;

/// Attach a description to a foreign error and pick its domain variant
///
/// ```
/// use sioc_domain::Error;
/// use sioc_infrastructure::ErrorContext;
///
/// let err = std::fs::read_to_string("/nonexistent/sioc.toml")
///     .io_context("Failed to read config file")
///     .unwrap_err();
/// assert!(matches!(err, Error::Io { .. }));
/// ```
pub trait ErrorContext<T> {
    /// Fail as [`Error::Infrastructure`]
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Fail as [`Error::Io`]
    fn io_context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Fail as [`Error::Configuration`]
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = described(&context, err);
            Error::Infrastructure { message, source }
        })
    }

    fn io_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = described(&context, err);
            Error::Io { message, source }
        })
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = described(&context, err);
            Error::Configuration { message, source }
        })
    }
}

fn described<C, E>(context: &C, err: E) -> (String, Source)
where
    C: fmt::Display,
    E: std::error::Error + Send + Sync + 'static,
{
    (format!("{context}: {err}"), Some(Box::new(err)))
}
