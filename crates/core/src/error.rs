//! Error types for cs-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for cs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cs-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Help topic not found
    #[error("No help topic or alias matches: {0}")]
    TopicNotFound(String),

    /// Two help topics claim the same name or alias
    #[error("Duplicate help topic registration: {0}")]
    DuplicateTopic(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,           // UsageError
            Error::TopicNotFound(_) => 5,    // NotFound
            Error::DuplicateTopic(_) => 6,   // Conflict
            _ => 1,                          // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::TopicNotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::DuplicateTopic("test".into()).exit_code(), 6);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::TopicNotFound("wildcard".into());
        assert_eq!(err.to_string(), "No help topic or alias matches: wildcard");

        let err = Error::DuplicateTopic("apis".into());
        assert_eq!(
            err.to_string(),
            "Duplicate help topic registration: apis"
        );
    }
}
