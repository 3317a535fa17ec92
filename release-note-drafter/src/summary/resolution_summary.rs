//! Resolution summary counters.

use super::outcome::ResolutionOutcome;

/// Counts of how each referenced issue fared during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// Number of issues resolved.
    pub resolved: usize,

    /// Number of lookups that returned an error.
    pub failed: usize,

    /// Number of lookups cancelled by the run deadline.
    pub timed_out: usize,
}

impl ResolutionSummary {
    /// Updates the summary with a resolution outcome.
    pub fn record(&mut self, outcome: &ResolutionOutcome) {
        match outcome {
            ResolutionOutcome::Resolved(_) => self.resolved += 1,
            ResolutionOutcome::Failed { .. } => self.failed += 1,
            ResolutionOutcome::TimedOut { .. } => self.timed_out += 1,
        }
    }

    /// Returns the total number of references accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved + self.failed + self.timed_out
    }

    /// Returns true if any reference was left out of the checklist.
    #[must_use]
    pub fn has_omissions(&self) -> bool {
        self.failed > 0 || self.timed_out > 0
    }
}
