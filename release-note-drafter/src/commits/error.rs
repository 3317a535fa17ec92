//! Forge error types.

use thiserror::Error;

/// Errors returned by the remote forge collaborators.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The request to GitHub could not be made or its response not read.
    #[error("GitHub request failed: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// GitHub answered with an error status.
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The requested resource does not exist or is not visible to the token.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The token lacks access to the requested resource.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
