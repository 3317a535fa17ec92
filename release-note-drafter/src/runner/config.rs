//! Runner configuration.

use crate::config::{ConfigError, Settings};
use crate::resolver::{PoolOptions, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Branch holding the changes to release, when none is given.
pub const DEFAULT_FROM_BRANCH: &str = "staging";

/// Branch being released into, when none is given.
pub const DEFAULT_TO_BRANCH: &str = "master";

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub user: Option<String>,
    pub repo: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
}

/// Validated configuration for a release note run.
#[derive(Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Repository owner.
    owner: String,
    /// Repository name.
    repo: String,
    /// Branch carrying the changes.
    from: String,
    /// Branch being released into.
    to: String,
    /// Resolver pool limits.
    pool: PoolOptions,
}

impl RunnerConfig {
    /// Creates a configuration with default branches and pool limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] for the first of token, owner or
    /// repository that is blank.
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            token: required("token", Some(token.into()))?,
            owner: required("user", Some(owner.into()))?,
            repo: required("repo", Some(repo.into()))?,
            from: DEFAULT_FROM_BRANCH.to_string(),
            to: DEFAULT_TO_BRANCH.to_string(),
            pool: PoolOptions::default(),
        })
    }

    /// Builds a configuration from command line overrides layered over a
    /// settings file, falling back to built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] if the token, owner or
    /// repository is not supplied by any source.
    pub fn resolve(overrides: ConfigOverrides, settings: Settings) -> Result<Self, ConfigError> {
        let token = required("token", overrides.token)?;
        let owner = required("user", overrides.user.or(settings.user))?;
        let repo = required("repo", overrides.repo.or(settings.repo))?;

        let concurrency = overrides
            .concurrency
            .or(settings.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);
        let timeout = overrides
            .timeout_secs
            .or(settings.timeout_secs)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self::new(token, owner, repo)?
            .with_branches(
                overrides
                    .from
                    .or(settings.from)
                    .unwrap_or_else(|| DEFAULT_FROM_BRANCH.to_string()),
                overrides
                    .to
                    .or(settings.to)
                    .unwrap_or_else(|| DEFAULT_TO_BRANCH.to_string()),
            )
            .with_pool(PoolOptions::new(concurrency, timeout)))
    }

    /// Sets the branches to compare.
    pub fn with_branches(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// Sets the resolver pool limits.
    pub fn with_pool(mut self, pool: PoolOptions) -> Self {
        self.pool = pool;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the branch carrying the changes.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the branch being released into.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the resolver pool limits.
    pub fn pool(&self) -> &PoolOptions {
        &self.pool
    }
}

impl std::fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("pool", &self.pool)
            .finish()
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingValue { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> ConfigOverrides {
        ConfigOverrides {
            token: Some("ghp_test".to_string()),
            user: Some("acme".to_string()),
            repo: Some("widgets".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn applies_defaults() {
        let config = RunnerConfig::resolve(overrides(), Settings::default()).unwrap();

        assert_eq!(config.from(), "staging");
        assert_eq!(config.to(), "master");
        assert_eq!(config.pool(), &PoolOptions::default());
    }

    #[test]
    fn reports_missing_values_in_order() {
        let missing = |overrides: ConfigOverrides| {
            match RunnerConfig::resolve(overrides, Settings::default()) {
                Err(ConfigError::MissingValue { name }) => name,
                other => panic!("expected missing value, got {other:?}"),
            }
        };

        assert_eq!(missing(ConfigOverrides::default()), "token");
        assert_eq!(
            missing(ConfigOverrides {
                token: Some("t".to_string()),
                ..Default::default()
            }),
            "user"
        );
        assert_eq!(
            missing(ConfigOverrides {
                repo: None,
                ..overrides()
            }),
            "repo"
        );
        assert_eq!(
            missing(ConfigOverrides {
                token: Some("  ".to_string()),
                ..overrides()
            }),
            "token"
        );
    }

    #[test]
    fn overrides_win_over_settings() {
        let settings = Settings {
            user: Some("file-owner".to_string()),
            repo: Some("file-repo".to_string()),
            from: Some("develop".to_string()),
            to: Some("main".to_string()),
            concurrency: Some(2),
            timeout_secs: Some(5),
        };
        let overrides = ConfigOverrides {
            token: Some("t".to_string()),
            to: Some("release".to_string()),
            concurrency: Some(16),
            ..Default::default()
        };

        let config = RunnerConfig::resolve(overrides, settings).unwrap();

        assert_eq!(config.owner(), "file-owner");
        assert_eq!(config.repo(), "file-repo");
        assert_eq!(config.from(), "develop");
        assert_eq!(config.to(), "release");
        assert_eq!(config.pool().concurrency(), 16);
        assert_eq!(config.pool().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = RunnerConfig::new("ghp_secret", "acme", "widgets").unwrap();
        assert!(!format!("{config:?}").contains("ghp_secret"));
    }
}
