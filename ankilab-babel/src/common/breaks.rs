//! Line break encoding for single-line formats
//!
//! Anki and Noji import one note per line and render `<br>` as a line break, so embedded
//! newlines travel as that literal marker.

/// The marker standing in for `\n` inside a field.
pub const BREAK_MARKER: &str = "<br>";

/// Replace every newline with [BREAK_MARKER].
pub fn encode_breaks(field: &str) -> String {
    field.replace('\n', BREAK_MARKER)
}

/// Replace every [BREAK_MARKER] with a newline.
pub fn decode_breaks(field: &str) -> String {
    field.replace(BREAK_MARKER, "\n")
}
