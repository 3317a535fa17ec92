//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was not supplied by any source.
    #[error("`{name}` not set.")]
    MissingValue { name: &'static str },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in a settings file.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}
