//! `Q:`/`A:` text format
//!
//! The format models are asked to answer in, and the one used to send a deck back to a model
//! for refinement:
//!
//! ```text
//! Q: What is a closure?
//! A: A function bundled with its enclosing lexical scope.
//!
//! Q: How do you memoize a function in one line?
//! A:
//!     cache = {}
//!     def memo(x): return cache.setdefault(x, f(x))
//! ```
//!
//! Parsing delegates to the recovery parser, so anything it can recover is accepted and an
//! input without cards is an empty deck, not an error. When an answer opens with indented
//! code the serializer starts it on the line after `A:`, otherwise the marker would swallow
//! the indentation on the way back in.

use crate::error::FormatError;
use crate::format::Format;
use ankilab_parser::flashcards::card::is_indented;
use ankilab_parser::{parse_cards, Card};

pub struct QaFormat;

impl QaFormat {
    fn render_card(card: &Card) -> String {
        if is_indented(&card.answer) {
            format!("Q: {}\nA:\n{}", card.question, card.answer)
        } else {
            format!("Q: {}\nA: {}", card.question, card.answer)
        }
    }
}

impl Format for QaFormat {
    fn name(&self) -> &str {
        "qa"
    }

    fn description(&self) -> &str {
        "Q:/A: text, as written by models"
    }

    fn file_extensions(&self) -> &[&str] {
        &["qa", "md"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Card>, FormatError> {
        Ok(parse_cards(source))
    }

    fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
        if cards.is_empty() {
            return Ok(String::new());
        }
        let blocks: Vec<String> = cards.iter().map(Self::render_card).collect();
        Ok(format!("{}\n", blocks.join("\n\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_serialize() {
        let cards = vec![Card::new("One?", "First"), Card::new("Two?", "Line 1\nLine 2")];
        let text = QaFormat.serialize(&cards).unwrap();
        assert_eq!(text, "Q: One?\nA: First\n\nQ: Two?\nA: Line 1\nLine 2\n");
    }

    #[test]
    fn test_qa_indented_answer_starts_on_next_line() {
        let cards = vec![Card::new("Code?", "    x = 1\n    y = 2")];
        let text = QaFormat.serialize(&cards).unwrap();
        assert_eq!(text, "Q: Code?\nA:\n    x = 1\n    y = 2\n");
        assert_eq!(QaFormat.parse(&text).unwrap(), cards);
    }

    #[test]
    fn test_qa_parse_without_cards_is_empty() {
        assert_eq!(QaFormat.parse("no cards here").unwrap(), Vec::<Card>::new());
    }
}
