//! Concurrent resolution of issue references.
//!
//! Every unique reference is looked up through an [`IssueLookup`]. Lookups
//! run concurrently up to a configurable limit and report back to a single
//! collecting loop, which receives exactly one [`ResolutionOutcome`] per
//! reference. Failed lookups are logged and omitted from the result. Lookups
//! still running when the deadline passes are cancelled and reported as
//! timed out.

mod issue;

pub use issue::ResolvedIssue;

use crate::commits::ForgeError;
use crate::summary::{ResolutionOutcome, ResolutionSummary};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info_span, warn, Instrument};

/// Default number of concurrent issue lookups.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default deadline for resolving all references.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Looks up issues by number within a single repository.
#[async_trait]
pub trait IssueLookup: Send + Sync {
    /// Fetches the issue with the given number.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] if the issue does not exist or cannot be read.
    /// Such errors only affect this one reference.
    async fn get_issue(&self, number: u64) -> Result<ResolvedIssue, ForgeError>;
}

/// Limits applied to a resolver pool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    concurrency: usize,
    timeout: Duration,
}

impl PoolOptions {
    /// Creates pool options. A concurrency below 1 is raised to 1.
    pub fn new(concurrency: usize, timeout: Duration) -> Self {
        Self {
            concurrency: concurrency.max(1),
            timeout,
        }
    }

    /// Returns the maximum number of lookups in flight.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the deadline for the whole pool run.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT)
    }
}

/// Issues resolved by a pool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved issues, sorted by number.
    pub issues: Vec<ResolvedIssue>,

    /// How every reference fared.
    pub summary: ResolutionSummary,
}

impl Resolution {
    /// Returns the checklist lines, one per resolved issue.
    pub fn checklist(&self) -> Vec<String> {
        self.issues.iter().map(ResolvedIssue::checklist_line).collect()
    }
}

/// Resolves every reference and collects the successful lookups.
///
/// Returns only once every reference has produced an outcome, either
/// by finishing or by being cancelled at the deadline.
pub async fn resolve_issues<L>(
    lookup: &L,
    references: &BTreeSet<u64>,
    options: &PoolOptions,
) -> Resolution
where
    L: IssueLookup + ?Sized,
{
    let mut pending = references.clone();
    let mut resolution = Resolution::default();

    {
        let outcomes = stream::iter(references.iter().copied())
            .map(|number| resolve_one(lookup, number))
            .buffer_unordered(options.concurrency())
            .take_until(tokio::time::sleep(options.timeout()));
        let mut outcomes = std::pin::pin!(outcomes);

        while let Some(outcome) = outcomes.next().await {
            pending.remove(&outcome.number());
            resolution.summary.record(&outcome);
            if let ResolutionOutcome::Resolved(issue) = outcome {
                resolution.issues.push(issue);
            }
        }
    }

    for number in pending {
        warn!(
            issue_number = number,
            timeout_secs = options.timeout().as_secs_f64(),
            "Issue lookup timed out, omitting from checklist"
        );
        resolution
            .summary
            .record(&ResolutionOutcome::TimedOut { number });
    }

    resolution.issues.sort_by_key(|issue| issue.number);
    debug!(
        resolved = resolution.summary.resolved,
        failed = resolution.summary.failed,
        timed_out = resolution.summary.timed_out,
        "Issue resolution complete"
    );
    resolution
}

async fn resolve_one<L>(lookup: &L, number: u64) -> ResolutionOutcome
where
    L: IssueLookup + ?Sized,
{
    let span = info_span!("resolve_issue", issue_number = number);

    async {
        match lookup.get_issue(number).await {
            Ok(issue) => {
                debug!(title = %issue.title, "Issue resolved");
                // The referenced number wins over whatever the forge echoes back.
                ResolutionOutcome::Resolved(ResolvedIssue::new(number, issue.title))
            }
            Err(e) => {
                warn!(error = %e, "Failed to resolve issue, omitting from checklist");
                ResolutionOutcome::Failed {
                    number,
                    error: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}
