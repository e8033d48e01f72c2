//! Crate-level error type.
//!
//! Evaluation itself has almost no failure modes: unroutable paths and
//! malformed query strings degrade to "no match". The only error that can
//! escape an evaluation is one raised by a caller-supplied condition.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Boxed error produced by a fallible [`Condition`](crate::matching::Condition).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied override condition failed. The source is passed
    /// through untouched.
    #[error("override condition failed: {0}")]
    Condition(#[source] BoxError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_config_errors_convert() {
        let config_err = parse_config("routes = 1").unwrap_err();
        let message = config_err.to_string();
        let err = Error::from(config_err);
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_condition_source_is_preserved() {
        let err = Error::Condition("timed out".into());
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("timed out"));
    }
}
