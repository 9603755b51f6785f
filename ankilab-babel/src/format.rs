//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing decks.

use crate::error::FormatError;
use ankilab_parser::Card;

/// Trait for deck formats
///
/// Implementors provide conversion between a string representation and a list of cards.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
///         Ok(cards.iter().map(|c| c.question.clone()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "qa", "tsv", "deck")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions (without the dot) this format claims when detecting by path
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → cards)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (cards → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into cards
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Card>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize cards into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _cards: &[Card]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Whether the serialized output is binary rather than text
    fn is_binary(&self) -> bool {
        false
    }

    /// Serialize cards into the bytes of a file
    ///
    /// Text formats get this for free from [Format::serialize]; binary formats override it.
    fn serialize_bytes(&self, cards: &[Card]) -> Result<Vec<u8>, FormatError> {
        self.serialize(cards).map(String::into_bytes)
    }
}
