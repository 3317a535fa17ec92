//! Commit information.

/// A commit taken from a branch comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA, kept for diagnostics.
    pub sha: String,

    /// Full commit message.
    pub message: String,

    /// Login of the account that committed the change, when GitHub could
    /// link the commit to one.
    pub committer_login: Option<String>,
}

impl Commit {
    /// Creates a new commit.
    pub fn new(
        sha: impl Into<String>,
        message: impl Into<String>,
        committer_login: Option<String>,
    ) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            committer_login,
        }
    }

    /// Returns the committer login if it is present and not empty.
    ///
    /// The login is returned verbatim; committers are compared by exact
    /// string equality.
    pub fn committer(&self) -> Option<&str> {
        self.committer_login
            .as_deref()
            .filter(|login| !login.is_empty())
    }
}
