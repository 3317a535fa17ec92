//! Orchestrates a release note run against GitHub.

mod config;
mod error;

pub use config::{ConfigOverrides, RunnerConfig, DEFAULT_FROM_BRANCH, DEFAULT_TO_BRANCH};
pub use error::RunnerError;

use crate::github::GitHubForge;
use crate::note::{draft_release_note, ReleaseNote};
use octocrab::Octocrab;
use tracing::info;

/// Drafts release notes for one repository.
pub struct Runner {
    config: RunnerConfig,
    forge: GitHubForge,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .build()?;
        let forge = GitHubForge::new(octocrab, config.owner(), config.repo());
        Ok(Self { config, forge })
    }

    /// Compares the configured branches and drafts the release note.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Diff`] if the comparison fails.
    pub async fn run(&self) -> Result<ReleaseNote, RunnerError> {
        let config = &self.config;
        info!(
            repo = %self.forge.full_name(),
            from = %config.from(),
            to = %config.to(),
            concurrency = config.pool().concurrency(),
            "Drafting release note"
        );

        draft_release_note(
            &self.forge,
            &self.forge,
            config.to(),
            config.from(),
            config.pool(),
        )
        .await
        .map_err(|source| RunnerError::Diff {
            base: config.to().to_string(),
            head: config.from().to_string(),
            source,
        })
    }
}
