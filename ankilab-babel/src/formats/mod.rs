//! Format implementations
//!
//! This module contains all format implementations that convert between decks and their
//! text representations.

pub mod deck;
pub mod delimited;
pub mod prompt;
pub mod qa;
pub mod tsv;

pub use deck::{ApkgFormat, DeckJsonFormat, DeckOptions, DeckPackage};
pub use delimited::DelimitedFormat;
pub use prompt::PromptFormat;
pub use qa::QaFormat;
pub use tsv::TsvFormat;

/// Header words skipped by the delimited readers when they open a row.
pub const DEFAULT_SKIP_HEADERS: &[&str] = &["front", "frente", "pergunta", "question", "q"];

pub(crate) fn default_skip_headers() -> Vec<String> {
    DEFAULT_SKIP_HEADERS.iter().map(|h| h.to_string()).collect()
}
