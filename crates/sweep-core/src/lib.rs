//! # sweep-core
//!
//! Classification engine for git-sweep.
//!
//! Given a remote and a mainline branch, finds the remote branches that are
//! fully merged into mainline and those without a commit since a cutoff,
//! combines both into an ordered [`Report`], and deletes the candidates once
//! the caller has decided to go ahead.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod merged;
pub mod report;
pub mod skip;
pub mod stale;

#[cfg(test)]
mod mock;

pub use cleanup::{CleanupOutcome, Decision, Deletion};
pub use config::Config;
pub use error::{Error, Result};
pub use report::{
    Candidate, ClassifyOptions, MergeCheck, MissingMainline, Reason, Report, SkippedBranch,
    Staleness, classify,
};
pub use skip::SkipSet;
pub use stale::{StaleBranch, cutoff_before};
