//! Fluent assertions over recovered cards

use crate::flashcards::card::Card;

/// Create an assertion builder for a parsed deck
pub fn assert_cards(cards: &[Card]) -> DeckAssertion<'_> {
    DeckAssertion { cards }
}

pub struct DeckAssertion<'a> {
    cards: &'a [Card],
}

impl<'a> DeckAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.cards.len(),
            expected,
            "Expected {} cards, found {}: {:#?}",
            expected,
            self.cards.len(),
            self.cards
        );
        self
    }

    pub fn empty(self) -> Self {
        self.count(0)
    }

    /// Run assertions against the card at `index`
    pub fn card<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(CardAssertion<'a>),
    {
        let card = self.cards.get(index).unwrap_or_else(|| {
            panic!(
                "Expected a card at index {}, deck has {} cards",
                index,
                self.cards.len()
            )
        });
        check(CardAssertion {
            card,
            context: format!("card[{}]", index),
        });
        self
    }

    /// Questions in order, compared as a whole
    pub fn questions(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.cards.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(actual, expected, "Questions differ");
        self
    }
}

pub struct CardAssertion<'a> {
    card: &'a Card,
    context: String,
}

impl<'a> CardAssertion<'a> {
    pub fn question(self, expected: &str) -> Self {
        assert_eq!(
            self.card.question, expected,
            "{}: Expected question '{}', but got '{}'",
            self.context, expected, self.card.question
        );
        self
    }

    pub fn answer(self, expected: &str) -> Self {
        assert_eq!(
            self.card.answer, expected,
            "{}: Expected answer '{}', but got '{}'",
            self.context, expected, self.card.answer
        );
        self
    }

    pub fn answer_contains(self, substring: &str) -> Self {
        assert!(
            self.card.answer.contains(substring),
            "{}: Expected answer to contain '{}', but got '{}'",
            self.context,
            substring,
            self.card.answer
        );
        self
    }

    pub fn answer_line_count(self, expected: usize) -> Self {
        let actual = self.card.answer.lines().count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} answer lines, found {}",
            self.context, expected, actual
        );
        self
    }
}
