//! Card recovery parsing
//!
//!     Turns a block of free-form text into an ordered list of [Card]s. The input is usually a
//!     model response, so it is treated as untrusted: anything that cannot be attributed to a
//!     card is dropped rather than reported.
//!
//! Pipeline
//!
//!     1. Cleaning ([cleaning]): unify line endings, remove markdown fences and bold markers,
//!        drop the enumeration in front of question markers and filter out noise lines
//!        (headings, rules, score annotations, conversational preambles).
//!     2. Block slicing ([extraction]): every line that starts with a question marker opens a
//!        block that runs until the next one or the end of the text.
//!     3. Field extraction ([extraction]): each block runs through a two-state machine fed by
//!        the line tags of [classification]. Indented lines and lines led by code symbols are
//!        kept verbatim inside an open answer, which is how multi-line code survives.
//!     4. Normalization ([Card::from_fragments]): the question collapses to one line, the
//!        answer loses its blank edges. Blocks missing either field are skipped.
//!
//! Failure
//!
//!     [parse_cards] is total over its input. The few internal failure paths surface through
//!     [try_parse_cards] as a [ParseError]; [parse_cards] logs them and returns an empty deck.

pub mod classification;
pub mod cleaning;
pub mod extraction;

use crate::flashcards::card::Card;

pub use classification::{classify_line, LineKind};
pub use cleaning::clean;
pub use extraction::{extract_block, question_offsets, BlockState};

/// Internal failures of the recovery parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A block boundary did not land on a character boundary of the cleaned text.
    #[error("block {index} spans invalid range {start}..{end}")]
    InvalidBlockRange {
        index: usize,
        start: usize,
        end: usize,
    },
}

/// Recover every card from `raw`, in input order.
///
/// Never fails: text without question markers, blocks missing a field and internal errors all
/// end up as missing cards. Callers should treat an empty result as "nothing recognizable".
pub fn parse_cards(raw: &str) -> Vec<Card> {
    match try_parse_cards(raw) {
        Ok(cards) => cards,
        Err(err) => {
            tracing::warn!(error = %err, "card recovery failed, returning no cards");
            Vec::new()
        }
    }
}

/// Same as [parse_cards], but surfaces internal failures instead of swallowing them.
pub fn try_parse_cards(raw: &str) -> Result<Vec<Card>, ParseError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let text = clean(raw);
    let offsets = question_offsets(&text);
    if offsets.is_empty() {
        tracing::debug!("no question markers found");
        return Ok(Vec::new());
    }

    let mut cards = Vec::with_capacity(offsets.len());
    for (index, &start) in offsets.iter().enumerate() {
        let end = offsets.get(index + 1).copied().unwrap_or(text.len());
        let block = text
            .get(start..end)
            .ok_or(ParseError::InvalidBlockRange { index, start, end })?;

        match extract_block(block) {
            Some(card) => cards.push(card),
            None => tracing::debug!(index, "dropping block without both question and answer"),
        }
    }

    tracing::debug!(blocks = offsets.len(), cards = cards.len(), "recovered cards");
    Ok(cards)
}
