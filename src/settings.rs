//! Layered configuration.
//!
//! `defaults/languagebuddy.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. User files and
//! single-key overrides are layered on top via [`Loader`] before
//! deserializing into [`Settings`].

use crate::language::Language;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/languagebuddy.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub lesson: LessonSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonSettings {
    pub reference_language: Language,
    pub foreign_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// A `tracing_subscriber::EnvFilter` directive such as `warn` or `languagebuddy=debug`.
    pub level: String,
}

/// How the CLI renders parsed notes and lexicons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "yaml"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
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

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_settings() {
        let settings = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(settings.lesson.reference_language, Language::English);
        assert_eq!(settings.lesson.foreign_language, Language::Croatian);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let settings = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("settings to build");
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languagebuddy.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let settings = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.output.format, OutputFormat::Text);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new()
            .with_file(dir.path().join("absent.toml"))
            .build();
        assert!(result.is_err());
    }
}
