//! Committer collection for release note mentions.

use crate::commits::Commit;
use std::collections::HashSet;
use tracing::warn;

/// Deduplicated committer logins, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitterSet {
    logins: Vec<String>,
}

impl CommitterSet {
    /// Collects the committers of the given commits.
    ///
    /// Logins are deduplicated by exact string equality. Commits without a
    /// linked committer account are skipped with a warning.
    pub fn from_commits(commits: &[Commit]) -> Self {
        let mut seen = HashSet::new();
        let mut logins = Vec::new();

        for commit in commits {
            let Some(login) = commit.committer() else {
                warn!(sha = %commit.sha, "Commit has no committer login, not crediting");
                continue;
            };

            if seen.insert(login) {
                logins.push(login.to_string());
            }
        }

        Self { logins }
    }

    /// Returns the logins.
    pub fn logins(&self) -> &[String] {
        &self.logins
    }

    /// Returns the number of committers.
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Returns true if there are no committers.
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Formats the mention line, e.g. `/cc @alice @bob`.
    ///
    /// The `/cc` token is always present.
    pub fn mention_line(&self) -> String {
        let mut line = String::from("/cc");
        for login in &self.logins {
            line.push_str(" @");
            line.push_str(login);
        }
        line
    }
}
