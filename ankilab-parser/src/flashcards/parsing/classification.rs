//! Line Classification
//!
//! Tags each line of a block once, so the extraction state machine only matches on the tag.
//! Classification is independent of state: whether a tag opens a field or continues one is
//! decided by [extraction](super::extraction).
use crate::flashcards::card::is_indented;
use once_cell::sync::Lazy;
use regex::Regex;

/// `Q:`, `P:` or `Pergunta:` followed by the inline question text.
pub(super) static QUESTION_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:pergunta|q|p)\s*:\s*(.*)$").unwrap());

/// `A:`, `R:` or `Resposta:` followed by the inline answer text.
pub(super) static ANSWER_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:resposta|a|r)\s*:\s*(.*)$").unwrap());

/// Characters that make a non-indented line read as code rather than prose.
pub const CODE_SYMBOLS: &str = "{}[]();=><|&+-*/\\@#$%^";

/// The tag of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with a question marker; carries the text after the colon.
    QuestionMarker(&'a str),
    /// Starts with an answer marker and is not indented; carries the text after the colon.
    AnswerMarker(&'a str),
    /// Four spaces or a tab in front; never a marker, even if it looks like one.
    Indented,
    /// Not indented, first visible character is one of [CODE_SYMBOLS].
    SymbolLed,
    /// Anything else.
    Plain,
}

/// Determine the kind of a line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_indented(line) {
        return LineKind::Indented;
    }
    if let Some(content) = marker_content(&QUESTION_MARKER_REGEX, trimmed) {
        return LineKind::QuestionMarker(content);
    }
    if let Some(content) = marker_content(&ANSWER_MARKER_REGEX, trimmed) {
        return LineKind::AnswerMarker(content);
    }
    if is_symbol_led(trimmed) {
        return LineKind::SymbolLed;
    }
    LineKind::Plain
}

/// Check if the first visible character is a code symbol
pub fn is_symbol_led(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| CODE_SYMBOLS.contains(c))
}

fn marker_content<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(
            classify_line("Q: What is ownership?"),
            LineKind::QuestionMarker("What is ownership?")
        );
        assert_eq!(classify_line("pergunta : x"), LineKind::QuestionMarker("x"));
        assert_eq!(classify_line("P:"), LineKind::QuestionMarker(""));
        assert_eq!(classify_line("a: yes"), LineKind::AnswerMarker("yes"));
        assert_eq!(
            classify_line("Resposta: sim"),
            LineKind::AnswerMarker("sim")
        );
    }

    #[test]
    fn test_indented_marker_is_content() {
        assert_eq!(classify_line("    A: label in a comment"), LineKind::Indented);
        assert_eq!(classify_line("\tQ: nope"), LineKind::Indented);
    }

    #[test]
    fn test_words_starting_with_marker_letters_are_plain() {
        assert_eq!(classify_line("Answer: spelled out"), LineKind::Plain);
        assert_eq!(classify_line("Quick note"), LineKind::Plain);
        assert_eq!(classify_line("Result = 3"), LineKind::Plain);
    }

    #[test]
    fn test_symbol_led_lines() {
        assert_eq!(classify_line("}"), LineKind::SymbolLed);
        assert_eq!(classify_line("  $ cargo build"), LineKind::SymbolLed);
        assert_eq!(classify_line("-> not prose"), LineKind::SymbolLed);
        assert_eq!(classify_line("   "), LineKind::Blank);
    }
}
