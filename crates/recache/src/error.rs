//! Error types for recache.
//!
//! The cache surface is total over keys and values: a `get` miss is a
//! normal `None`, never an error. The only recoverable failure is a bad
//! configuration at construction time. Misuse of internal entry handles is
//! a programming error guarded by debug assertions, not an error value.

use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for recache.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Configuration errors
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The cache can never hold the single entry a `put` inserts, so a
    /// zero capacity is rejected up front instead of being given ad-hoc
    /// eviction semantics.
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::from(ConfigError::ZeroCapacity);
        assert_eq!(err.to_string(), "config error: cache capacity must be at least 1");
    }

    #[test]
    fn from_config_error() {
        let err: Error = ConfigError::ZeroCapacity.into();
        assert!(matches!(err, Error::Config(ConfigError::ZeroCapacity)));
    }
}
