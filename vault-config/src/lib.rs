//! Shared configuration loader for vault-bridge.
//!
//! `defaults/vault.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`VaultConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use vault_babel::ProseOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/vault.default.toml");

/// Project-local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "vault-bridge.toml";

/// Top-level configuration consumed by vault-bridge applications.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    pub markdown: MarkdownConfig,
    pub logging: LoggingConfig,
}

/// Markdown dialect knobs handed to the prose converter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub superscript: bool,
    pub front_matter_delimiter: String,
    pub unsafe_html: bool,
}

impl MarkdownConfig {
    fn delimiter(&self) -> Option<String> {
        match self.front_matter_delimiter.trim() {
            "" => None,
            fence => Some(fence.to_string()),
        }
    }
}

impl From<MarkdownConfig> for ProseOptions {
    fn from(config: MarkdownConfig) -> Self {
        ProseOptions::from(&config)
    }
}

impl From<&MarkdownConfig> for ProseOptions {
    fn from(config: &MarkdownConfig) -> Self {
        ProseOptions {
            table: config.table,
            strikethrough: config.strikethrough,
            autolink: config.autolink,
            tasklist: config.tasklist,
            superscript: config.superscript,
            front_matter_delimiter: config.delimiter(),
            unsafe_html: config.unsafe_html,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
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

    /// Layer `vault-bridge.toml` from `dir` if it exists.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.with_optional_file(path)
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
    pub fn build(self) -> Result<VaultConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VaultConfig, ConfigError> {
    Loader::new().build()
}
