//! Resolution outcome types and helpers.

mod outcome;
mod resolution_summary;

pub use outcome::ResolutionOutcome;
pub use resolution_summary::ResolutionSummary;
