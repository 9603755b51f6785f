//! Error types for format operations

use thiserror::Error;

/// Errors that can occur while converting decks between formats
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format registered under the requested name
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The format exists but cannot perform the requested direction
    #[error("{0}")]
    NotSupported(String),
    /// Source text could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Cards could not be encoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
