#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod commits;
pub mod committers;
pub mod config;
pub mod github;
pub mod note;
pub mod references;
pub mod resolver;
pub mod runner;
pub mod summary;

pub use commits::{Commit, DiffProvider, ForgeError};
pub use committers::CommitterSet;
pub use config::{load_settings, parse_settings, ConfigError, Settings};
pub use github::GitHubForge;
pub use note::{draft_release_note, ReleaseNote, HEADER};
pub use references::{extract_references, references_in};
pub use resolver::{
    resolve_issues, IssueLookup, PoolOptions, Resolution, ResolvedIssue, DEFAULT_CONCURRENCY,
    DEFAULT_TIMEOUT,
};
pub use runner::{
    ConfigOverrides, Runner, RunnerConfig, RunnerError, DEFAULT_FROM_BRANCH, DEFAULT_TO_BRANCH,
};
pub use summary::{ResolutionOutcome, ResolutionSummary};
