//! Error types for stockcast.

use thiserror::Error;

/// The main error type for stockcast operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required string parameter was empty.
    ///
    /// Unrecognized range, horizon or model codes are not errors; they fall
    /// back to their defaults. Only a missing value aborts the call.
    #[error("invalid argument: {field} is required")]
    InvalidArgument {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// Settings could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for Error {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// Reject empty required parameters.
///
/// Whitespace is not empty: a blank code is unrecognized and falls back.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument { field });
    }
    Ok(())
}

/// Convenience type alias for Results using the stockcast Error type.
pub type Result<T> = std::result::Result<T, Error>;
