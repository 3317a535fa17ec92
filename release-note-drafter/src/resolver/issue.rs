//! Resolved issue information.

use std::fmt;

/// An issue reference that was successfully looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIssue {
    /// Issue number, as referenced in the commit message.
    pub number: u64,

    /// Issue title.
    pub title: String,
}

impl ResolvedIssue {
    /// Creates a new resolved issue.
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }

    /// Formats the issue as an unchecked release checklist entry.
    pub fn checklist_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [ ] #{} {}", self.number, self.title)
    }
}
