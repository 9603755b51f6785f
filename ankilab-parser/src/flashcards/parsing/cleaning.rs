//! Text cleaning
//!
//! Strips the decoration models wrap around cards before blocks are located. Everything here
//! works on the whole text at once and never looks at card structure.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fence delimiters, with an optional language tag and the newline that ends them.
static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\w*\n?").unwrap());

/// A numbered prefix (`3.`, `3)`) right before a question marker at line start.
static ENUMERATED_QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\d+[.)][ \t]*((?:pergunta|q|p)[ \t]*:)").unwrap()
});

/// Lowercased prefixes of lines that never belong to a card.
pub const NOISE_PREFIXES: &[&str] = &[
    "[score:",
    "#",
    "---",
    "***",
    "===",
    "here are",
    "below",
    "hope this helps",
    "aqui estão",
    "aqui estao",
    "seguem",
    "abaixo",
    "espero que",
];

/// Run every cleaning step in order.
pub fn clean(raw: &str) -> String {
    let text = normalize_line_endings(raw);
    let text = strip_markdown(text.trim());
    let text = strip_enumeration(&text);
    drop_noise_lines(&text)
}

/// Convert `\r\n` to `\n`. A lone `\r` is left in place.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n")
}

/// Remove code fences and `**` emphasis markers as plain decoration.
pub fn strip_markdown(text: &str) -> String {
    CODE_FENCE_REGEX.replace_all(text, "").replace("**", "")
}

/// Remove list numbering in front of question markers, keeping the marker.
pub fn strip_enumeration(text: &str) -> String {
    ENUMERATED_QUESTION_REGEX
        .replace_all(text, "$1")
        .into_owned()
}

/// True when the trimmed, lowercased line starts with a known noise prefix.
pub fn is_noise_line(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    NOISE_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Drop headings, rules, score annotations and conversational filler lines.
pub fn drop_noise_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_noise_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
