//! Property-based tests for card recovery
//!
//! Cards are generated from restricted alphabets so that no generated line can be mistaken for
//! a marker or a noise line: questions always open with "What", answer lines with "It".

use ankilab_parser::{parse_cards, Card};
use proptest::prelude::*;

fn question_strategy() -> impl Strategy<Value = String> {
    "What [a-z]{1,8}( [a-z]{1,8}){0,5}\\?"
}

fn answer_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("It [a-z]{1,8}( [a-z]{1,8}){0,4}\\.", 1..4).prop_map(|lines| lines.join("\n"))
}

fn deck_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(
        (question_strategy(), answer_strategy()).prop_map(|(q, a)| Card::new(q, a)),
        0..8,
    )
}

fn render(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("Q: {}\nA: {}", card.question, card.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

const NOISE: &[&str] = &[
    "# Generated cards",
    "## Part two",
    "---",
    "=====",
    "[score: 7/10]",
    "Here are the flashcards:",
    "Below you will find more.",
    "Hope this helps!",
];

fn render_noisy(cards: &[Card], noise_seed: usize) -> String {
    let mut out = String::from("Here are your cards:\n\n");
    for (i, card) in cards.iter().enumerate() {
        out.push_str(NOISE[(noise_seed + i) % NOISE.len()]);
        out.push_str("\n\n");
        out.push_str(&format!(
            "{}. **Q:** {}\n**A:** {}\n\n",
            i + 1,
            card.question,
            card.answer
        ));
    }
    out.push_str("Hope this helps with your exam!\n");
    out
}

proptest! {
    #[test]
    fn test_order_and_content_preserved(cards in deck_strategy()) {
        prop_assert_eq!(parse_cards(&render(&cards)), cards);
    }

    #[test]
    fn test_reparse_is_idempotent(cards in deck_strategy()) {
        let first = parse_cards(&render(&cards));
        let second = parse_cards(&render(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_noise_does_not_change_result(cards in deck_strategy(), seed in 0usize..8) {
        let clean = parse_cards(&render(&cards));
        let noisy = parse_cards(&render_noisy(&cards, seed));
        prop_assert_eq!(noisy, clean);
    }

    #[test]
    fn test_arbitrary_text_never_panics(raw in "\\PC{0,400}") {
        let cards = parse_cards(&raw);
        for card in cards {
            prop_assert!(!card.question.trim().is_empty());
            prop_assert!(!card.answer.trim().is_empty());
        }
    }

    #[test]
    fn test_markerish_text_never_panics(
        lines in prop::collection::vec(
            prop_oneof![
                Just("Q:".to_string()),
                Just("A:".to_string()),
                Just("    A: x".to_string()),
                Just("```".to_string()),
                Just("**".to_string()),
                Just("1. Q: é?".to_string()),
                "[ -~]{0,20}",
            ],
            0..30,
        )
    ) {
        let _ = parse_cards(&lines.join("\n"));
    }
}
