//! Tab-separated export
//!
//! One card per line, question and answer separated by a tab, newlines inside a field written
//! as `<br>`. This is the plain-text import format of Anki and Noji. Reading accepts the same
//! layout, skipping header rows.

use crate::common::{read_delimited, write_delimited};
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::default_skip_headers;
use ankilab_parser::Card;

pub struct TsvFormat {
    skip_headers: Vec<String>,
}

impl TsvFormat {
    pub fn new(skip_headers: Vec<String>) -> Self {
        Self { skip_headers }
    }
}

impl Default for TsvFormat {
    fn default() -> Self {
        Self::new(default_skip_headers())
    }
}

impl Format for TsvFormat {
    fn name(&self) -> &str {
        "tsv"
    }

    fn description(&self) -> &str {
        "Tab-separated text with <br> line breaks (Anki/Noji import)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tsv", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Card>, FormatError> {
        read_delimited(source, Some(b'\t'), &self.skip_headers)
    }

    fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
        write_delimited(cards, b'\t')
    }
}
