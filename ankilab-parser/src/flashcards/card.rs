//! The Card record
//!
//!     A card is a question/answer pair. The two fields follow different rules:
//!
//!     - The question is a single logical line. Any whitespace run, embedded newlines included,
//!       collapses to one space so the question always renders on one line.
//!     - The answer keeps its line structure, since that is how multi-line code survives. Only
//!       blank lines at either end are removed, never blank lines in the middle.
//!
//!     Cards are only built from non-empty fields; see [Card::from_fragments].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single question/answer flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    /// Build a card from already-normalized fields.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Normalize raw fields and build a card, or `None` when either field ends up empty.
    pub fn from_fragments(question: &str, answer: &str) -> Option<Self> {
        let question = collapse_question(question);
        let answer = normalize_answer(answer);
        if question.is_empty() || answer.trim().is_empty() {
            return None;
        }
        Some(Self { question, answer })
    }

    /// True when the answer spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.answer.contains('\n')
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q: {}\nA: {}", self.question, self.answer)
    }
}

/// True for lines the parser treats as indented content: four spaces or a tab.
pub fn is_indented(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}

/// Collapse every whitespace run (newlines included) to a single space and trim the ends.
pub fn collapse_question(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip blank lines from both ends of an answer and trailing whitespace from each line.
///
/// The first line keeps its leading whitespace only when it is indented content, so an answer
/// that is a code block stays aligned while stray spaces before prose are dropped.
pub fn normalize_answer(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };

    let mut kept = lines[first..=last].to_vec();
    if !is_indented(kept[0]) {
        kept[0] = kept[0].trim_start();
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_question_joins_lines() {
        assert_eq!(
            collapse_question("  What   is\n a\tclosure? "),
            "What is a closure?"
        );
    }

    #[test]
    fn test_normalize_answer_strips_blank_edges_only() {
        let answer = "\n\n  first\n\n  second  \n\n";
        assert_eq!(normalize_answer(answer), "first\n\n  second");
    }

    #[test]
    fn test_normalize_answer_keeps_code_indentation() {
        let answer = "\n    cache = {}\n    return cache\n";
        assert_eq!(normalize_answer(answer), "    cache = {}\n    return cache");
    }

    #[test]
    fn test_normalize_answer_all_blank() {
        assert_eq!(normalize_answer(" \n\t\n"), "");
    }

    #[test]
    fn test_from_fragments_rejects_empty_fields() {
        assert!(Card::from_fragments("Question?", "   ").is_none());
        assert!(Card::from_fragments("", "Answer").is_none());
        assert_eq!(
            Card::from_fragments("Question?", "Answer"),
            Some(Card::new("Question?", "Answer"))
        );
    }

    #[test]
    fn test_is_indented() {
        assert!(is_indented("    x = 1"));
        assert!(is_indented("\tx = 1"));
        assert!(!is_indented("   x = 1"));
    }
}
