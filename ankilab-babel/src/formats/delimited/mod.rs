//! Comma/semicolon/tab separated decks
//!
//! Spreadsheet exports come with whatever delimiter the user's locale picked. The delimiter is
//! sniffed from the first line (tab, then semicolon, then comma); header rows, short rows and
//! rows with an empty field are skipped. `<br>` decodes to a newline. Serialization writes
//! comma-separated rows.

use crate::common::{read_delimited, write_delimited};
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::default_skip_headers;
use ankilab_parser::Card;

pub struct DelimitedFormat {
    skip_headers: Vec<String>,
}

impl DelimitedFormat {
    pub fn new(skip_headers: Vec<String>) -> Self {
        Self { skip_headers }
    }
}

impl Default for DelimitedFormat {
    fn default() -> Self {
        Self::new(default_skip_headers())
    }
}

impl Format for DelimitedFormat {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Delimited rows (comma, semicolon or tab), question first"
    }

    fn file_extensions(&self) -> &[&str] {
        &["csv"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Card>, FormatError> {
        read_delimited(source, None, &self.skip_headers)
    }

    fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
        write_delimited(cards, b',')
    }
}
