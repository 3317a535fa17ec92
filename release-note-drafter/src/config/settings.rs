//! Settings file contents.

use super::error::ConfigError;
use serde::Deserialize;

/// Parsed contents of a settings file.
///
/// Every field is optional; values given on the command line take
/// precedence. The GitHub token is deliberately not accepted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Repository owner.
    pub user: Option<String>,

    /// Repository name.
    pub repo: Option<String>,

    /// Branch carrying the changes to release.
    pub from: Option<String>,

    /// Branch being released into.
    pub to: Option<String>,

    /// Maximum concurrent issue lookups.
    pub concurrency: Option<usize>,

    /// Deadline in seconds for resolving all issues.
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Validates the parsed settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a string value is blank.
    pub fn validate(&self, path: &str) -> Result<(), ConfigError> {
        let fields = [
            ("user", &self.user),
            ("repo", &self.repo),
            ("from", &self.from),
            ("to", &self.to),
        ];

        for (name, value) in fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("{name} cannot be empty"),
                });
            }
        }

        Ok(())
    }
}
