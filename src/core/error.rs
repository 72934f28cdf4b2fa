use thiserror::Error;

/// Error types for the fallible edges of modhelper
///
/// The display helpers themselves are total; these cover reading host
/// records and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A timestamp could not be parsed as RFC 3339
    #[error("Invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        source: chrono::ParseError,
    },

    /// No platform config directory could be determined
    #[error("Config directory not available")]
    ConfigDirUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
