//! Shared configuration loader for the ankilab tools.
//!
//! `defaults/ankilab.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AnkilabConfig`].

use ankilab_babel::formats::{
    ApkgFormat, DeckJsonFormat, DeckOptions, DelimitedFormat, TsvFormat,
};
use ankilab_babel::FormatRegistry;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/ankilab.default.toml");

/// Top-level configuration consumed by ankilab applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AnkilabConfig {
    pub import: ImportConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Knobs for the delimited readers.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub skip_headers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub default_format: String,
    pub deck_name: String,
    pub wrap_code: bool,
    pub code_indicators: Vec<String>,
    pub model: ModelConfig,
}

/// The note type written into deck packages.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub id: u64,
    pub name: String,
    pub front_field: String,
    pub back_field: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AnkilabConfig {
    pub fn deck_options(&self) -> DeckOptions {
        let export = &self.export;
        DeckOptions {
            deck_name: export.deck_name.clone(),
            model_id: export.model.id,
            model_name: export.model.name.clone(),
            front_field: export.model.front_field.clone(),
            back_field: export.model.back_field.clone(),
            wrap_code: export.wrap_code,
            code_indicators: export.code_indicators.clone(),
        }
    }

    /// The default formats, with the configurable ones built from this configuration.
    pub fn format_registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::with_defaults();
        let skip_headers = self.import.skip_headers.clone();
        registry.register(TsvFormat::new(skip_headers.clone()));
        registry.register(DelimitedFormat::new(skip_headers));
        let deck_options = self.deck_options();
        registry.register(ApkgFormat::new(deck_options.clone()));
        registry.register(DeckJsonFormat::new(deck_options));
        registry
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AnkilabConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AnkilabConfig, ConfigError> {
    Loader::new().build()
}
