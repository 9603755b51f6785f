//! Numbered listing for review prompts
//!
//! Decks sent to a model for audit are numbered so the model can refer to individual cards:
//!
//! ```text
//! [Card 1]
//! Q: What is a closure?
//! A: A function bundled with its enclosing lexical scope.
//! ```
//!
//! The `[Card n]` banners are not noise to the recovery parser, so this format is write-only.

use crate::error::FormatError;
use crate::format::Format;
use ankilab_parser::Card;

pub struct PromptFormat;

impl Format for PromptFormat {
    fn name(&self) -> &str {
        "prompt"
    }

    fn description(&self) -> &str {
        "Numbered [Card n] listing for review prompts (write-only)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, cards: &[Card]) -> Result<String, FormatError> {
        let mut lines = Vec::with_capacity(cards.len() * 4);
        for (i, card) in cards.iter().enumerate() {
            lines.push(format!("[Card {}]", i + 1));
            lines.push(format!("Q: {}", card.question));
            lines.push(format!("A: {}", card.answer));
            lines.push(String::new());
        }
        Ok(lines.join("\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_listing() {
        let cards = vec![Card::new("One?", "1"), Card::new("Two?", "2")];
        let text = PromptFormat.serialize(&cards).unwrap();
        assert_eq!(text, "[Card 1]\nQ: One?\nA: 1\n\n[Card 2]\nQ: Two?\nA: 2");
    }

    #[test]
    fn test_prompt_is_write_only() {
        assert!(!PromptFormat.supports_parsing());
        assert!(PromptFormat.parse("[Card 1]").is_err());
    }
}
