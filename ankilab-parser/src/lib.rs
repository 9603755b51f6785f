//! # ankilab-parser
//!
//! Recovers question/answer flashcards from free-form text, typically the raw output of a
//! language model asked to write cards.
//!
//! File Layout
//!
//!     The model's output is untrusted text: it wraps cards in markdown fences, numbers them,
//!     adds chatty preambles and sometimes emits code answers that span many lines. The parser
//!     is therefore a best-effort recovery pass rather than a grammar, split in small stages:
//!
//!     src/flashcards
//!       ├── card.rs                 The Card record and its field normalization
//!       ├── parsing                 The recovery parser
//!       │   ├── cleaning.rs         Line endings, markdown decoration, enumeration, noise lines
//!       │   ├── classification.rs   Per-line tagging (markers, indentation, code symbols)
//!       │   └── extraction.rs       Block slicing and the question/answer state machine
//!       ├── review.rs               Section extraction from review/audit responses
//!       └── testing                 Fluent assertions and sample loading for tests
//!
//!     The entry point is [parse_cards](flashcards::parsing::parse_cards). It never fails: any
//!     input that yields no card simply produces an empty deck.

pub mod flashcards;

pub use flashcards::card::Card;
pub use flashcards::parsing::{parse_cards, try_parse_cards, ParseError};
