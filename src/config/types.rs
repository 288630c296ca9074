use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "filePattern")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings read from `.lingo.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LingoSettings {
    /// Locale every lookup falls back to. Must have a catalog.
    pub default_locale: String,

    /// Directory holding one `<locale>.json` file or `<locale>/` directory per locale.
    /// Relative paths are resolved against the workspace root.
    pub catalog_dir: String,

    /// Glob selecting catalog files inside locale directories.
    pub file_pattern: String,

    /// Separator used to join nested catalog keys.
    pub key_separator: String,
}

impl LingoSettings {
    /// # Errors
    /// - Required field is empty
    /// - Wildcard default locale
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let default_locale = Locale::new(&self.default_locale);
        if default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale cannot be empty. Example: \"en_US\"",
            ));
        } else if default_locale.is_wildcard() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale must name a concrete locale, not '*'",
            ));
        }

        if self.catalog_dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "catalogDir",
                "The catalog directory cannot be empty. Example: \"translations\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LingoSettings {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
            catalog_dir: "translations".to_string(),
            file_pattern: "**/*.json".to_string(),
            key_separator: ".".to_string(),
        }
    }
}
