//! CLI commands
//!
//! Each command reads its input, runs the library, and writes the rendered result. Errors are
//! returned as messages; `main` prints them and exits non-zero.

use ankilab_babel::FormatRegistry;
use ankilab_parser::flashcards::review::{
    extract_final_cards, extract_report, extract_suggested_cards,
};
use ankilab_parser::{parse_cards, Card};
use std::io::Read;
use std::path::{Path, PathBuf};

const RETRY_HINT: &str =
    "no cards could be recovered; ask the model again for blocks starting with 'Q:' and 'A:'";

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn read(&self) -> Result<String, String> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| format!("Failed to read stdin: {}", e))?;
                Ok(text)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e)),
        }
    }
}

/// Where rendered cards go and in which format.
#[derive(Debug, Clone)]
pub struct Output {
    pub format: Option<String>,
    pub path: Option<PathBuf>,
    pub default_format: String,
}

impl Output {
    /// `--to` if given, else the format claiming the output extension, else the default.
    fn format_name(&self, registry: &FormatRegistry) -> String {
        if let Some(format) = &self.format {
            return format.clone();
        }
        self.path
            .as_deref()
            .and_then(|path| registry.detect(path).ok())
            .map(|format| format.name().to_string())
            .unwrap_or_else(|| self.default_format.clone())
    }

    fn write(&self, text: &str) -> Result<(), String> {
        let mut text = text.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        match &self.path {
            Some(path) => std::fs::write(path, text)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
            None => {
                print!("{}", text);
                Ok(())
            }
        }
    }

    /// Binary formats only go to files.
    fn write_bytes(&self, format: &str, bytes: &[u8]) -> Result<(), String> {
        let path = self.path.as_ref().ok_or_else(|| {
            format!("Format '{}' is binary; pass --output <file>", format)
        })?;
        std::fs::write(path, bytes)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSection {
    Suggested,
    Final,
    Report,
}

fn write_cards(registry: &FormatRegistry, cards: &[Card], output: &Output) -> Result<(), String> {
    let format = output.format_name(registry);
    if registry.get(&format).map_err(|e| e.to_string())?.is_binary() {
        let bytes = registry
            .serialize_bytes(cards, &format)
            .map_err(|e| e.to_string())?;
        output.write_bytes(&format, &bytes)?;
    } else {
        let rendered = registry
            .serialize(cards, &format)
            .map_err(|e| e.to_string())?;
        output.write(&rendered)?;
    }
    tracing::info!(cards = cards.len(), format = %format, "exported cards");
    Ok(())
}

/// Recover cards from raw model output.
pub fn parse(registry: &FormatRegistry, input: &Input, output: &Output) -> Result<(), String> {
    let cards = parse_cards(&input.read()?);
    if cards.is_empty() {
        return Err(RETRY_HINT.to_string());
    }
    write_cards(registry, &cards, output)
}

/// Read a deck in one format and write it in another.
pub fn convert(
    registry: &FormatRegistry,
    input: &Input,
    from: Option<&str>,
    output: &Output,
) -> Result<(), String> {
    let from = match (from, input) {
        (Some(name), _) => name.to_string(),
        (None, Input::File(path)) => detect_name(registry, path)?,
        (None, Input::Stdin) => {
            return Err("--from is required when reading from stdin".to_string());
        }
    };

    let cards = registry
        .parse(&input.read()?, &from)
        .map_err(|e| e.to_string())?;
    tracing::debug!(cards = cards.len(), format = %from, "read cards");
    write_cards(registry, &cards, output)
}

fn detect_name(registry: &FormatRegistry, path: &Path) -> Result<String, String> {
    registry
        .detect(path)
        .map(|format| format.name().to_string())
        .map_err(|_| {
            format!(
                "Cannot detect the format of {}; pass --from (available: {})",
                path.display(),
                registry.list_formats().join(", ")
            )
        })
}

/// Extract one section of an audit or final-review response.
pub fn review(
    registry: &FormatRegistry,
    input: &Input,
    section: ReviewSection,
    output: &Output,
) -> Result<(), String> {
    let response = input.read()?;
    let cards = match section {
        ReviewSection::Report => {
            let report = extract_report(&response)
                .ok_or_else(|| "The response has no change report".to_string())?;
            return output.write(&report);
        }
        ReviewSection::Suggested => extract_suggested_cards(&response),
        ReviewSection::Final => extract_final_cards(&response),
    };
    if cards.is_empty() {
        return Err(RETRY_HINT.to_string());
    }
    write_cards(registry, &cards, output)
}

/// Print every registered format with its extensions and directions.
pub fn list_formats(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let directions = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "-",
        };
        println!("  {} ({})", name, directions);
        println!("    {}", format.description());
        if !format.file_extensions().is_empty() {
            println!("    extensions: {}", format.file_extensions().join(", "));
        }
        println!();
    }
}
