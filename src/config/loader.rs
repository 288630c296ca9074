//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    LingoSettings,
};

/// Name of the settings file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".lingo.json";

impl LingoSettings {
    /// Reads `.lingo.json` from `workspace_root` and validates it.
    ///
    /// Missing fields, or a missing file, fall back to the defaults.
    ///
    /// # Errors
    /// - The file exists but cannot be read
    /// - The file is not valid settings JSON
    /// - Validation fails
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let config_path = workspace_root.join(CONFIG_FILE_NAME);

        let settings = if config_path.is_file() {
            tracing::debug!(path = %config_path.display(), "Loading settings");
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
            Self::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}
