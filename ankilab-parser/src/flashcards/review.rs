//! Review response helpers
//!
//!     Audit and final-review responses mix prose with card listings. The model is asked to
//!     head each part with a fixed banner; these helpers find the banner and hand the section
//!     after it to the recovery parser.
//!
//!     - Audit responses list suggested new cards under [SUGGESTED_CARDS_MARKERS]. When no
//!       banner is present the whole response is parsed, since audits often skip it.
//!     - Final reviews put the change report under [REPORT_MARKERS] followed by the revised
//!       deck under [FINAL_CARDS_MARKERS]. Without a banner there is no revised deck.
//!
//!     Markers are tried in order and the first one present wins.

use crate::flashcards::card::Card;
use crate::flashcards::parsing::parse_cards;

pub const SUGGESTED_CARDS_MARKERS: &[&str] = &[
    "=== NOVOS CARDS SUGERIDOS ===",
    "NOVOS CARDS SUGERIDOS",
    "=== CARDS SUGERIDOS ===",
];

pub const FINAL_CARDS_MARKERS: &[&str] = &[
    "=== CARDS FINAIS ===",
    "CARDS FINAIS",
    "=== DECK REVISADO ===",
];

pub const REPORT_MARKERS: &[&str] = &[
    "=== RELATÓRIO DE ALTERAÇÕES ===",
    "RELATÓRIO DE ALTERAÇÕES",
];

/// Byte offset of the first marker (in list order) found in `text`, with the marker length.
fn find_marker(text: &str, markers: &[&str]) -> Option<(usize, usize)> {
    markers
        .iter()
        .find_map(|marker| text.find(marker).map(|idx| (idx, marker.len())))
}

/// Cards suggested by an audit response.
pub fn extract_suggested_cards(response: &str) -> Vec<Card> {
    let section = match find_marker(response, SUGGESTED_CARDS_MARKERS) {
        Some((idx, len)) => &response[idx + len..],
        None => response,
    };
    parse_cards(section)
}

/// The revised deck of a final review, empty when the response has no deck banner.
pub fn extract_final_cards(response: &str) -> Vec<Card> {
    match find_marker(response, FINAL_CARDS_MARKERS) {
        Some((idx, len)) => parse_cards(&response[idx + len..]),
        None => {
            tracing::debug!("final review response has no deck banner");
            Vec::new()
        }
    }
}

/// The change report of a final review, banner included, up to the revised deck.
pub fn extract_report(response: &str) -> Option<String> {
    let (start, len) = find_marker(response, REPORT_MARKERS)?;
    let rest = &response[start + len..];
    let end = find_marker(rest, FINAL_CARDS_MARKERS)
        .map(|(idx, _)| start + len + idx)
        .unwrap_or(response.len());
    Some(response[start..end].trim().to_string())
}

/// Keep a refined deck only when it retains at least half of the original cards.
///
/// Refinement asks a model to rewrite a deck; a response that lost most cards is more likely
/// truncated than improved, so the original is kept instead.
pub fn accept_refinement(original: Vec<Card>, refined: Vec<Card>) -> Vec<Card> {
    if original.is_empty() {
        return original;
    }
    let min_cards = (original.len() / 2).max(1);
    if refined.len() >= min_cards {
        refined
    } else {
        tracing::info!(
            original = original.len(),
            refined = refined.len(),
            "refinement dropped too many cards, keeping the original deck"
        );
        original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINAL_REVIEW: &str = "\
=== RELATÓRIO DE ALTERAÇÕES ===
- Card 2 merged into card 1

=== CARDS FINAIS ===
Q: What is a borrow?
A: A reference to a value.
";

    #[test]
    fn test_extract_final_cards() {
        let cards = extract_final_cards(FINAL_REVIEW);
        assert_eq!(
            cards,
            vec![Card::new("What is a borrow?", "A reference to a value.")]
        );
    }

    #[test]
    fn test_extract_final_cards_without_banner() {
        assert!(extract_final_cards("Q: a?\nA: b").is_empty());
    }

    #[test]
    fn test_extract_report_stops_at_deck() {
        let report = extract_report(FINAL_REVIEW).unwrap();
        assert_eq!(
            report,
            "=== RELATÓRIO DE ALTERAÇÕES ===\n- Card 2 merged into card 1"
        );
    }

    #[test]
    fn test_extract_report_missing() {
        assert!(extract_report("nothing here").is_none());
    }

    #[test]
    fn test_extract_suggested_cards_falls_back_to_whole_response() {
        let cards = extract_suggested_cards("Q: a?\nA: b");
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_extract_suggested_cards_after_banner() {
        let response = "Q: old?\nA: old\n\nNOVOS CARDS SUGERIDOS\nQ: new?\nA: new";
        assert_eq!(extract_suggested_cards(response), vec![Card::new("new?", "new")]);
    }

    #[test]
    fn test_accept_refinement_threshold() {
        let original: Vec<Card> = (0..4).map(|i| Card::new(format!("q{i}"), "a")).collect();
        let refined = vec![Card::new("r1", "a"), Card::new("r2", "a")];
        assert_eq!(accept_refinement(original.clone(), refined.clone()), refined);

        let too_few = vec![Card::new("r1", "a")];
        assert_eq!(accept_refinement(original.clone(), too_few), original);
    }

    #[test]
    fn test_accept_refinement_single_card_needs_one() {
        let original = vec![Card::new("q", "a")];
        assert_eq!(accept_refinement(original.clone(), Vec::new()), original);
    }
}
