//! Anki deck packages
//!
//! Data Model:
//!
//!     A package mirrors what Anki stores for a deck of basic notes:
//!
//!     | Package | Anki | Notes |
//!     | deck    | Deck | id derived from the deck name, so re-exports update the same deck |
//!     | model   | Note type | two fields in fixed order (front, back), one card template |
//!     | notes   | Notes | one per card, `fields = [question, answer]` |
//!
//!     Note GUIDs follow Anki's `guid_for`: the first 8 bytes of the SHA-256 of the fields
//!     joined by `__`, written in Anki's base91 alphabet. Importing the same card twice then
//!     updates the note instead of duplicating it.
//!
//!     Answers that look like code (several lines, or containing one of the code indicators)
//!     are wrapped in `<pre><code>` so the card template keeps their layout.
//!
//! Formats
//!
//!     - `deck` ([ApkgFormat]): the `.apkg` file Anki imports, see [apkg].
//!     - `deck-json` ([DeckJsonFormat]): the same package as JSON, for inspecting what an export
//!       will contain. It parses back, unwrapping code answers.

pub mod apkg;

pub use apkg::ApkgFormat;

use crate::error::FormatError;
use crate::format::Format;
use ankilab_parser::Card;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const CODE_OPEN: &str = "<pre><code>";
const CODE_CLOSE: &str = "</code></pre>";

const BASE91_TABLE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

const DEFAULT_CSS: &str = "\
.card {
    font-family: 'Segoe UI', Arial, sans-serif;
    font-size: 18px;
    text-align: left;
    line-height: 1.5;
}
pre, code {
    font-family: 'Consolas', 'Cascadia Code', monospace;
    display: block;
    overflow-x: auto;
    white-space: pre;
}
";

/// Knobs for building a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    pub deck_name: String,
    pub model_id: u64,
    pub model_name: String,
    pub front_field: String,
    pub back_field: String,
    pub wrap_code: bool,
    pub code_indicators: Vec<String>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            deck_name: "AnkiLab".to_string(),
            model_id: 1607392319,
            model_name: "AnkiLab Card".to_string(),
            front_field: "Front".to_string(),
            back_field: "Back".to_string(),
            wrap_code: true,
            code_indicators: [
                "def ", "function ", "{", "=>", "import ", "const ", "let ", "var ",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPackage {
    pub deck: DeckInfo,
    pub model: NoteModel,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteModel {
    pub id: u64,
    pub name: String,
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
    pub css: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub qfmt: String,
    pub afmt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub guid: String,
    pub fields: Vec<String>,
}

impl DeckPackage {
    /// Build a package holding one note per card
    pub fn build(cards: &[Card], options: &DeckOptions) -> Self {
        let notes = cards
            .iter()
            .map(|card| Note {
                guid: guid_for(&[&card.question, &card.answer]),
                fields: vec![card.question.clone(), back_field(card, options)],
            })
            .collect();

        DeckPackage {
            deck: DeckInfo {
                id: deck_id(&options.deck_name),
                name: options.deck_name.clone(),
            },
            model: NoteModel {
                id: options.model_id,
                name: options.model_name.clone(),
                fields: vec![options.front_field.clone(), options.back_field.clone()],
                templates: vec![CardTemplate {
                    name: "Card 1".to_string(),
                    qfmt: format!("{{{{{}}}}}", options.front_field),
                    afmt: format!(
                        "{{{{FrontSide}}}}<hr id=\"answer\">{{{{{}}}}}",
                        options.back_field
                    ),
                }],
                css: DEFAULT_CSS.to_string(),
            },
            notes,
        }
    }

    /// Recover the cards, unwrapping code answers
    pub fn cards(&self) -> Vec<Card> {
        self.notes
            .iter()
            .filter_map(|note| match note.fields.as_slice() {
                [front, back, ..] => Card::from_fragments(front, unwrap_code(back)),
                _ => {
                    tracing::debug!(guid = %note.guid, "skipping note with fewer than two fields");
                    None
                }
            })
            .collect()
    }
}

/// True when the answer should be rendered as a code block
pub fn looks_like_code(card: &Card, indicators: &[String]) -> bool {
    card.is_multiline() || indicators.iter().any(|ind| card.answer.contains(ind.as_str()))
}

fn back_field(card: &Card, options: &DeckOptions) -> String {
    if options.wrap_code && looks_like_code(card, &options.code_indicators) {
        format!("{}{}{}", CODE_OPEN, card.answer, CODE_CLOSE)
    } else {
        card.answer.clone()
    }
}

fn unwrap_code(field: &str) -> &str {
    field
        .strip_prefix(CODE_OPEN)
        .and_then(|rest| rest.strip_suffix(CODE_CLOSE))
        .unwrap_or(field)
}

/// First 8 bytes of the SHA-256 of `text`, big-endian
fn hash_prefix(text: &str) -> u64 {
    Sha256::digest(text.as_bytes())
        .iter()
        .take(8)
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

/// Anki-compatible note GUID for a list of field values
pub fn guid_for(values: &[&str]) -> String {
    let mut hash = hash_prefix(&values.join("__"));
    let base = BASE91_TABLE.len() as u64;
    let mut reversed = Vec::new();
    while hash > 0 {
        reversed.push(BASE91_TABLE[(hash % base) as usize] as char);
        hash /= base;
    }
    reversed.iter().rev().collect()
}

/// Stable ten-digit deck id derived from the deck name
pub fn deck_id(name: &str) -> u64 {
    hash_prefix(name) % 10_000_000_000
}

/// The package as pretty-printed JSON
pub struct DeckJsonFormat {
    options: DeckOptions,
}

impl DeckJsonFormat {
    pub fn new(options: DeckOptions) -> Self {
        Self { options }
    }
}

impl Default for DeckJsonFormat {
    fn default() -> Self {
        Self::new(DeckOptions::default())
    }
}

impl Format for DeckJsonFormat {
    fn name(&self) -> &str {
        "deck-json"
    }

    fn description(&self) -> &str {
        "Deck package as JSON, for inspecting an export"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Card>, FormatError> {
        let package: DeckPackage =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        Ok(package.cards())
    }

    fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
        let package = DeckPackage::build(cards, &self.options);
        serde_json::to_string_pretty(&package)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
