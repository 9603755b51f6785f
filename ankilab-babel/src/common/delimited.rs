//! Delimited text reading and writing
//!
//!     Both the tab-separated export and the spreadsheet formats go through the `csv` crate, so
//!     fields holding the delimiter or quotes are quoted on the way out and unquoted on the way
//!     in. Newlines never reach the csv layer: they are encoded as `<br>` first.
//!
//!     Reading is lenient, the way hand-made spreadsheets need it to be:
//!
//!     - rows with fewer than two fields are ignored, extra fields are ignored;
//!     - rows whose first field is a header word (`front`, `question`, ...) are ignored;
//!     - rows with an empty question or answer are ignored.

use crate::common::breaks::{decode_breaks, encode_breaks};
use crate::error::FormatError;
use ankilab_parser::Card;

/// Pick the delimiter from the first line: tab, else semicolon, else comma.
pub fn sniff_delimiter(source: &str) -> u8 {
    let first_line = source.split('\n').next().unwrap_or_default();
    if first_line.contains('\t') {
        b'\t'
    } else if first_line.contains(';') {
        b';'
    } else {
        b','
    }
}

/// Read question/answer rows. `delimiter` is sniffed when `None`.
pub fn read_delimited(
    source: &str,
    delimiter: Option<u8>,
    skip_headers: &[String],
) -> Result<Vec<Card>, FormatError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }

    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(source));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(source.as_bytes());

    let mut cards = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| FormatError::ParseError(e.to_string()))?;
        let (question, answer) = match (record.get(0), record.get(1)) {
            (Some(q), Some(a)) => (q, a),
            _ => {
                tracing::debug!(row, "skipping row with fewer than two fields");
                continue;
            }
        };

        let lowered = question.trim().to_lowercase();
        if skip_headers.iter().any(|h| h.trim().to_lowercase() == lowered) {
            tracing::debug!(row, "skipping header row");
            continue;
        }

        match Card::from_fragments(&decode_breaks(question), &decode_breaks(answer)) {
            Some(card) => cards.push(card),
            None => tracing::debug!(row, "skipping row with an empty field"),
        }
    }
    Ok(cards)
}

/// Write one `question<delimiter>answer` row per card, newline-terminated.
pub fn write_delimited(cards: &[Card], delimiter: u8) -> Result<String, FormatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for card in cards {
        writer
            .write_record([encode_breaks(&card.question), encode_breaks(&card.answer)])
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FormatError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["front".to_string(), "question".to_string()]
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a\tb;c,d"), b'\t');
        assert_eq!(sniff_delimiter("a;b,c"), b';');
        assert_eq!(sniff_delimiter("a,b"), b',');
        assert_eq!(sniff_delimiter("ab\nc\td"), b',');
    }

    #[test]
    fn test_read_skips_headers_and_short_rows() {
        let source = "Front;Back\nWhat is 2+2?;4\nlonely\n;missing question\n";
        let cards = read_delimited(source, None, &headers()).unwrap();
        assert_eq!(cards, vec![Card::new("What is 2+2?", "4")]);
    }

    #[test]
    fn test_header_words_match_case_insensitively() {
        let headers = vec!["Term".to_string()];
        let source = "TERM,Definition\nterm,a word\nborrow,a reference\n";
        let cards = read_delimited(source, None, &headers).unwrap();
        assert_eq!(cards, vec![Card::new("borrow", "a reference")]);
    }

    #[test]
    fn test_read_trims_prose_but_keeps_code_indentation() {
        let source = "Q1, plain answer\nQ2,    x = 1<br>    y = 2\n";
        let cards = read_delimited(source, None, &[]).unwrap();
        assert_eq!(cards[0].answer, "plain answer");
        assert_eq!(cards[1].answer, "    x = 1\n    y = 2");
    }

    #[test]
    fn test_write_quotes_fields_with_delimiter() {
        let cards = vec![Card::new("a\tb", "c")];
        assert_eq!(write_delimited(&cards, b'\t').unwrap(), "\"a\tb\"\tc\n");
    }

    #[test]
    fn test_write_empty_deck() {
        assert_eq!(write_delimited(&[], b'\t').unwrap(), "");
    }
}
