//! Per-reference resolution outcomes.

use crate::resolver::ResolvedIssue;

/// Result of resolving a single issue reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The issue was fetched and will appear in the checklist.
    Resolved(ResolvedIssue),

    /// The lookup failed and the reference is omitted.
    Failed {
        /// Referenced issue number.
        number: u64,
        /// Error message.
        error: String,
    },

    /// The lookup did not finish before the run deadline and was cancelled.
    TimedOut {
        /// Referenced issue number.
        number: u64,
    },
}

impl ResolutionOutcome {
    /// Returns the issue number this outcome belongs to.
    pub fn number(&self) -> u64 {
        match self {
            ResolutionOutcome::Resolved(issue) => issue.number,
            ResolutionOutcome::Failed { number, .. } | ResolutionOutcome::TimedOut { number } => {
                *number
            }
        }
    }
}
