//! Shared configuration loader for summa.
//!
//! `defaults/summa.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SummaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use summa_render::{DisplayOptions, DocumentOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/summa.default.toml");

/// Top-level configuration consumed by summa applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaConfig {
    pub render: RenderConfig,
    pub display: DisplayConfig,
    pub document: DocumentConfig,
}

/// Input selection.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// `auto` or a registered format name
    pub from: String,
}

impl RenderConfig {
    /// The forced format, or `None` when the payload decides.
    pub fn forced_format(&self) -> Option<&str> {
        match self.from.as_str() {
            "" | "auto" => None,
            name => Some(name),
        }
    }
}

/// Post-processing of rendered fragments.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub strip_styles: bool,
    pub linkify_urls: bool,
}

impl From<&DisplayConfig> for DisplayOptions {
    fn from(config: &DisplayConfig) -> Self {
        DisplayOptions {
            strip_styles: config.strip_styles,
            linkify_urls: config.linkify_urls,
        }
    }
}

/// Standalone page output.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub standalone: bool,
    pub title: String,
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl DocumentConfig {
    /// Page options when standalone output is enabled.
    pub fn options(&self) -> Option<DocumentOptions> {
        if !self.standalone {
            return None;
        }
        let options = DocumentOptions::new(self.title.clone());
        Some(match &self.custom_css {
            Some(css) => options.with_custom_css(css.clone()),
            None => options,
        })
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SummaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SummaConfig, ConfigError> {
    Loader::new().build()
}
