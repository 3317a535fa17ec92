//! Release note assembly.
//!
//! A release note is the header line, the issue checklist, an empty line and
//! the committer mention line, joined with newlines. An empty checklist still
//! occupies one (empty) line, so a note for an empty diff is
//! `"Release\n\n\n/cc"`.

use crate::commits::{DiffProvider, ForgeError};
use crate::committers::CommitterSet;
use crate::references::extract_references;
use crate::resolver::{resolve_issues, IssueLookup, PoolOptions, ResolvedIssue};
use std::fmt;
use tracing::{info, info_span, warn, Instrument};

/// First line of every release note.
pub const HEADER: &str = "Release";

/// A composed release note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    text: String,
}

impl ReleaseNote {
    /// Composes a note from resolved issues and committers.
    pub fn assemble(issues: &[ResolvedIssue], committers: &CommitterSet) -> Self {
        let checklist = issues
            .iter()
            .map(ResolvedIssue::checklist_line)
            .collect::<Vec<_>>()
            .join("\n");

        let text = [
            HEADER.to_string(),
            checklist,
            String::new(),
            committers.mention_line(),
        ]
        .join("\n");

        Self { text }
    }

    /// Returns the note text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the note, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for ReleaseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Drafts a release note for the commits in `head` that are not in `base`.
///
/// # Arguments
///
/// * `diff` - Supplies the commits between the branches
/// * `lookup` - Resolves referenced issues
/// * `base` - Branch being released into
/// * `head` - Branch carrying the changes
/// * `options` - Resolver pool limits
///
/// # Errors
///
/// Returns [`ForgeError`] if the branch comparison fails. Individual issue
/// lookups never fail the draft.
pub async fn draft_release_note<D, L>(
    diff: &D,
    lookup: &L,
    base: &str,
    head: &str,
    options: &PoolOptions,
) -> Result<ReleaseNote, ForgeError>
where
    D: DiffProvider + ?Sized,
    L: IssueLookup + ?Sized,
{
    let span = info_span!("draft_release_note", base = %base, head = %head);

    async {
        let commits = diff.compare_branches(base, head).await?;
        info!(count = commits.len(), "Compared branches");

        let references = extract_references(&commits);
        let committers = CommitterSet::from_commits(&commits);
        info!(
            references = references.len(),
            committers = committers.len(),
            "Collected references and committers"
        );

        let resolution = resolve_issues(lookup, &references, options).await;
        let summary = &resolution.summary;
        if summary.has_omissions() {
            warn!(
                resolved = summary.resolved,
                failed = summary.failed,
                timed_out = summary.timed_out,
                "Some referenced issues were left out of the checklist"
            );
        } else {
            info!(resolved = summary.resolved, "Resolved issue references");
        }

        Ok(ReleaseNote::assemble(&resolution.issues, &committers))
    }
    .instrument(span)
    .await
}
