//! Format registry for format discovery and selection
//!
//! Formats are registered once and retrieved by name, or by file extension when the caller
//! only has a path.

use crate::error::FormatError;
use crate::format::Format;
use ankilab_parser::Card;
use std::collections::HashMap;
use std::path::Path;

/// Registry of deck formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
///
/// let cards = registry.parse("Q: a?\nA: b", "qa")?;
/// let tsv = registry.serialize(&cards, "tsv")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format claiming the extension of `path`
    ///
    /// When several formats claim the same extension the first one by name wins.
    pub fn detect(&self, path: &Path) -> Result<&dyn Format, FormatError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| FormatError::FormatNotFound(path.display().to_string()))?;

        self.list_formats()
            .iter()
            .filter_map(|name| self.formats.get(name))
            .find(|f| f.file_extensions().contains(&extension.as_str()))
            .map(|f| f.as_ref())
            .ok_or(FormatError::FormatNotFound(extension))
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Card>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize cards using the specified format
    pub fn serialize(&self, cards: &[Card], format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(cards)
    }

    /// Serialize cards to file bytes using the specified format
    pub fn serialize_bytes(&self, cards: &[Card], format: &str) -> Result<Vec<u8>, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize_bytes(cards)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::QaFormat);
        registry.register(crate::formats::TsvFormat::default());
        registry.register(crate::formats::DelimitedFormat::default());
        registry.register(crate::formats::PromptFormat);
        registry.register(crate::formats::ApkgFormat::default());
        registry.register(crate::formats::DeckJsonFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<Vec<Card>, FormatError> {
            Ok(vec![Card::new("test", "card")])
        }
        fn serialize(&self, _cards: &[Card]) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    // Serialize-only format
    struct WriteOnly;
    impl Format for WriteOnly {
        fn name(&self) -> &str {
            "write-only"
        }
        fn supports_serialization(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let format = registry.get("test");
        assert!(format.is_ok());
        assert_eq!(format.unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        let result = registry.get("nonexistent");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_parse() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.parse("input", "test").unwrap();
        assert_eq!(result, vec![Card::new("test", "card")]);
    }

    #[test]
    fn test_registry_parse_not_found() {
        let registry = FormatRegistry::new();

        let result = registry.parse("input", "nonexistent");
        match result.unwrap_err() {
            FormatError::FormatNotFound(name) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_parse_not_supported() {
        let mut registry = FormatRegistry::new();
        registry.register(WriteOnly);

        let result = registry.parse("input", "write-only");
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.serialize(&[Card::new("q", "a")], "test");
        assert_eq!(result.unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();

        let result = registry.serialize(&[], "nonexistent");
        match result.unwrap_err() {
            FormatError::FormatNotFound(name) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_serialize_bytes_of_text_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let bytes = registry.serialize_bytes(&[], "test").unwrap();
        assert_eq!(bytes, b"test output");
    }

    #[test]
    fn test_registry_serialize_bytes_not_supported() {
        let mut registry = FormatRegistry::new();
        registry.register(WriteOnly);
        registry.register(TestFormat);

        assert!(registry.serialize_bytes(&[], "write-only").is_err());
        assert!(matches!(
            registry.serialize_bytes(&[], "missing"),
            Err(FormatError::FormatNotFound(_))
        ));
    }

    #[test]
    fn test_registry_detect_by_extension() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let format = registry.detect(Path::new("deck.TST")).unwrap();
        assert_eq!(format.name(), "test");
        assert!(registry.detect(Path::new("deck.unknown")).is_err());
        assert!(registry.detect(Path::new("no-extension")).is_err());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["csv", "deck", "deck-json", "prompt", "qa", "tsv"]
        );
    }

    #[test]
    fn test_registry_default_detection() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.detect(Path::new("out.txt")).unwrap().name(), "tsv");
        assert_eq!(registry.detect(Path::new("out.csv")).unwrap().name(), "csv");
        assert_eq!(registry.detect(Path::new("out.json")).unwrap().name(), "deck-json");
        assert_eq!(registry.detect(Path::new("out.apkg")).unwrap().name(), "deck");
        assert_eq!(registry.detect(Path::new("cards.md")).unwrap().name(), "qa");
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat); // Replace

        assert_eq!(registry.list_formats().len(), 1);
    }
}
