//! Commits between two branches and the collaborator that supplies them.

mod commit;
mod error;

pub use commit::Commit;
pub use error::ForgeError;

use async_trait::async_trait;

/// Supplies the ordered list of commits between two branches.
///
/// Implementations are scoped to a single repository.
#[async_trait]
pub trait DiffProvider: Send + Sync {
    /// Returns the commits reachable from `head` but not from `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError`] if the comparison cannot be fetched. This is
    /// fatal for a release note run.
    async fn compare_branches(&self, base: &str, head: &str) -> Result<Vec<Commit>, ForgeError>;
}
