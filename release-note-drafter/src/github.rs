//! GitHub-backed forge collaborators.
//!
//! [`GitHubForge`] implements [`DiffProvider`] with the compare API and
//! [`IssueLookup`] with the issues API, both scoped to one repository.
//! Responses are read into minimal local models holding only the fields the
//! release note needs.

use crate::commits::{Commit, DiffProvider, ForgeError};
use crate::resolver::{IssueLookup, ResolvedIssue};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

/// A single GitHub repository accessed through an authenticated client.
#[derive(Debug, Clone)]
pub struct GitHubForge {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

/// Body of `GET /repos/{owner}/{repo}/compare/{base}...{head}`.
#[derive(Debug, Deserialize)]
struct Comparison {
    commits: Vec<ComparedCommit>,
}

#[derive(Debug, Deserialize)]
struct ComparedCommit {
    sha: String,
    commit: CommitDetails,
    /// `null` when the committer email is not linked to an account.
    committer: Option<Account>,
}

#[derive(Debug, Deserialize)]
struct CommitDetails {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Account {
    login: String,
}

/// Body of `GET /repos/{owner}/{repo}/issues/{number}`.
#[derive(Debug, Deserialize)]
struct IssueSummary {
    title: String,
}

impl From<ComparedCommit> for Commit {
    fn from(compared: ComparedCommit) -> Self {
        Commit::new(
            compared.sha,
            compared.commit.message,
            compared.committer.map(|account| account.login),
        )
    }
}

impl GitHubForge {
    /// Creates a forge for `owner/repo`.
    pub fn new(octocrab: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Returns the repository in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[async_trait]
impl DiffProvider for GitHubForge {
    async fn compare_branches(&self, base: &str, head: &str) -> Result<Vec<Commit>, ForgeError> {
        debug!(repo = %self.full_name(), base, head, "Comparing branches");

        let route = format!(
            "/repos/{}/{}/compare/{base}...{head}",
            self.owner, self.repo
        );
        let comparison: Comparison = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| classify(e, format!("{} {base}...{head}", self.full_name())))?;

        Ok(comparison.commits.into_iter().map(Commit::from).collect())
    }
}

#[async_trait]
impl IssueLookup for GitHubForge {
    async fn get_issue(&self, number: u64) -> Result<ResolvedIssue, ForgeError> {
        let route = format!("/repos/{}/{}/issues/{number}", self.owner, self.repo);
        let issue: IssueSummary = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(|e| classify(e, format!("{}#{number}", self.full_name())))?;

        Ok(ResolvedIssue::new(number, issue.title))
    }
}

/// Maps GitHub API error responses onto dedicated variants by status code.
fn classify(error: octocrab::Error, resource: String) -> ForgeError {
    if let octocrab::Error::GitHub { source, .. } = &error {
        let message = source.message.lines().next().unwrap_or_default().to_string();
        return match source.status_code.as_u16() {
            404 => ForgeError::NotFound(resource),
            403 => ForgeError::PermissionDenied(format!("{resource}: {message}")),
            status => ForgeError::Api { status, message },
        };
    }
    ForgeError::GitHubError(error)
}
