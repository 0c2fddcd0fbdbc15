//! Error types for engine operations

use kindred_domain::PersonId;
use thiserror::Error;

/// Errors that can occur in engine operations
///
/// Unrelated people are not an error: matching them yields the
/// "Not Related" result.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A required person (e.g. the layout root) is not in the snapshot
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported locale tag
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}
