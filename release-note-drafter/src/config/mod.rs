//! Settings file loading.
//!
//! An optional TOML file can supply defaults for everything except the
//! token:
//!
//! ```toml
//! user = "acme"
//! repo = "widgets"
//! from = "staging"
//! to = "master"
//! concurrency = 8
//! timeout-secs = 30
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::path::Path;
use tracing::debug;

/// Loads and validates a settings file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
/// contains unknown keys or has blank values.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let shown = path.display().to_string();
    debug!(path = %shown, "Loading settings");

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: shown.clone(),
        source: e,
    })?;

    parse_settings(&content, &shown)
}

/// Parses and validates settings from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError`] if the content is invalid.
pub fn parse_settings(content: &str, path: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::TomlError {
        path: path.to_string(),
        source: e,
    })?;
    settings.validate(path)?;
    Ok(settings)
}
