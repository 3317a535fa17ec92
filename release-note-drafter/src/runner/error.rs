//! Runner error types.

use crate::commits::ForgeError;

/// Errors that end a release note run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Missing or invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error("Failed to build GitHub client: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// The branch comparison could not be fetched.
    #[error("Failed to compare {head} against {base}: {source}")]
    Diff {
        base: String,
        head: String,
        #[source]
        source: ForgeError,
    },
}
