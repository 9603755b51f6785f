//! Block slicing and field extraction
//!
//!     A block runs from one question marker at line start to the next one. Inside a block a
//!     single forward pass moves through three states:
//!
//!         Seeking ──QuestionMarker──▶ InQuestion ──AnswerMarker──▶ InAnswer
//!
//!     - InQuestion collects every non-blank line, trimmed. An indented line that looks like an
//!       answer marker is classified [LineKind::Indented] and therefore stays question text.
//!     - InAnswer collects every line verbatim minus trailing whitespace. Indented lines,
//!       symbol-led code lines and prose all land here; nothing leaves this state, so a code
//!       comment reading `A: label` cannot open a new field.
//!
//!     There is no backtracking and no lookahead past the current line.

use super::classification::{classify_line, LineKind};
use crate::flashcards::card::Card;
use once_cell::sync::Lazy;
use regex::Regex;

/// Question markers at the start of a line, used to locate block boundaries.
static BLOCK_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(?:pergunta|q|p)[ \t]*:").unwrap());

/// Where the extraction pass currently is within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Seeking,
    InQuestion,
    InAnswer,
}

/// Byte offsets of every question marker that starts a line.
pub fn question_offsets(text: &str) -> Vec<usize> {
    BLOCK_START_REGEX.find_iter(text).map(|m| m.start()).collect()
}

/// Accumulates the fragments of one block.
#[derive(Debug, Default)]
struct Fragments<'a> {
    question: Vec<&'a str>,
    answer: Vec<&'a str>,
}

impl<'a> Fragments<'a> {
    /// Feed one line and return the next state.
    fn step(&mut self, state: BlockState, line: &'a str) -> BlockState {
        match (state, classify_line(line)) {
            (BlockState::Seeking, LineKind::QuestionMarker(content)) => {
                push_non_empty(&mut self.question, content);
                BlockState::InQuestion
            }
            (BlockState::Seeking, _) => BlockState::Seeking,
            (BlockState::InQuestion, LineKind::AnswerMarker(content)) => {
                push_non_empty(&mut self.answer, content);
                BlockState::InAnswer
            }
            (BlockState::InQuestion, LineKind::Blank) => BlockState::InQuestion,
            (BlockState::InQuestion, _) => {
                self.question.push(line.trim());
                BlockState::InQuestion
            }
            (BlockState::InAnswer, _) => {
                self.answer.push(line.trim_end());
                BlockState::InAnswer
            }
        }
    }
}

fn push_non_empty<'a>(fragments: &mut Vec<&'a str>, content: &'a str) {
    if !content.is_empty() {
        fragments.push(content);
    }
}

/// Extract the card held by one block, if both fields are present.
pub fn extract_block(block: &str) -> Option<Card> {
    let mut fragments = Fragments::default();
    let mut state = BlockState::Seeking;
    for line in block.trim_end().lines() {
        state = fragments.step(state, line);
    }

    if state != BlockState::InAnswer {
        return None;
    }
    Card::from_fragments(
        &fragments.question.join(" "),
        &fragments.answer.join("\n"),
    )
}
