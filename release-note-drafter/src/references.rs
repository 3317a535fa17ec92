//! Issue reference extraction from commit messages.
//!
//! An issue reference is `#` followed by one or more decimal digits anywhere
//! in a commit message. References are collected into a set keyed by their
//! numeric value, so `#7`, `#007` and a second `#7` in another commit all
//! collapse to a single entry.

use crate::commits::Commit;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

static ISSUE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("issue reference pattern is valid"));

/// Extracts the unique issue numbers referenced across all commit messages.
///
/// Commits without references contribute nothing and an empty commit list
/// yields an empty set.
pub fn extract_references(commits: &[Commit]) -> BTreeSet<u64> {
    let references: BTreeSet<u64> = commits
        .iter()
        .flat_map(|commit| references_in(&commit.message))
        .collect();

    debug!(
        commits = commits.len(),
        references = references.len(),
        "Extracted issue references"
    );
    references
}

/// Returns every issue number referenced in a single message, in order of
/// appearance and including repeats.
///
/// Numbers that do not fit in a `u64`, and `#0`, are not valid issue numbers
/// and are skipped.
pub fn references_in(message: &str) -> impl Iterator<Item = u64> + '_ {
    ISSUE_REFERENCE
        .captures_iter(message)
        .filter_map(|captures| {
            let digits = captures.get(1)?.as_str();
            match digits.parse::<u64>() {
                Ok(0) => None,
                Ok(number) => Some(number),
                Err(e) => {
                    debug!(digits, error = %e, "Ignoring out of range issue reference");
                    None
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(messages: &[&str]) -> Vec<Commit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, message)| Commit::new(format!("sha{i}"), *message, None))
            .collect()
    }

    #[test]
    fn extraction_ignores_commit_order_and_duplicates() {
        let forward = extract_references(&commits(&["fix #12", "see #12 and #7"]));
        let shuffled = extract_references(&commits(&["see #7 and #12", "fix #12"]));
        let duplicated =
            extract_references(&commits(&["fix #12", "fix #12", "see #12 and #7"]));

        assert_eq!(forward, BTreeSet::from([7, 12]));
        assert_eq!(forward, shuffled);
        assert_eq!(forward, duplicated);
    }

    #[test]
    fn leading_zeros_normalize() {
        let references = extract_references(&commits(&["closes #007", "closes #7"]));
        assert_eq!(references, BTreeSet::from([7]));
    }

    #[test]
    fn captures_every_match_in_a_message() {
        let found: Vec<u64> = references_in("#1 then #2, also #3#4").collect();
        assert_eq!(found, vec![1, 2, 3, 4]);
    }

    #[test]
    fn messages_without_references_contribute_nothing() {
        assert!(extract_references(&commits(&["chore: bump deps", "# heading", "#"])).is_empty());
        assert!(extract_references(&[]).is_empty());
    }

    #[test]
    fn skips_zero_and_overflowing_numbers() {
        let found: Vec<u64> = references_in("#0 #000 #99999999999999999999999 #5").collect();
        assert_eq!(found, vec![5]);
    }
}
