//! Branch classification report.
//!
//! Runs both classifiers against a repository and merges their results into
//! one ordered list of deletion candidates.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sweep_git::{GitOps, RemoteRef};

use crate::error::{Error, Result};
use crate::merged::{MergeScan, compute_merged};
use crate::skip::SkipSet;
use crate::stale::{StaleBranch, compute_stale};

/// Why a branch may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Merged,
    Stale,
}

/// Staleness details of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Staleness {
    pub last_commit: DateTime<Utc>,
    pub age_days: i64,
}

/// A remote branch eligible for deletion.
///
/// Always carries at least one reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub branch: RemoteRef,
    pub merged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale: Option<Staleness>,
}

impl Candidate {
    /// Reasons this branch was selected, merged first.
    #[must_use]
    pub fn reasons(&self) -> Vec<Reason> {
        let mut reasons = Vec::with_capacity(2);
        if self.merged {
            reasons.push(Reason::Merged);
        }
        if self.stale.is_some() {
            reasons.push(Reason::Stale);
        }
        reasons
    }

    /// Branch name without the remote prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.branch.name
    }
}

/// A branch left out of the report because its history could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBranch {
    pub branch: RemoteRef,
    pub message: String,
}

impl SkippedBranch {
    pub(crate) fn new(branch: &RemoteRef, error: &sweep_git::Error) -> Self {
        let message = match error {
            sweep_git::Error::HistoryUnreadable { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self {
            branch: branch.clone(),
            message,
        }
    }

    /// The error describing why this branch was skipped.
    #[must_use]
    pub fn to_error(&self) -> Error {
        Error::HistoryUnreadable {
            branch: self.branch.name.clone(),
            message: self.message.clone(),
        }
    }
}

/// Whether merged status was determined for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeCheck {
    /// Every eligible branch was checked against mainline.
    Performed,
    /// Mainline could not be resolved, so no branch was checked.
    ///
    /// Absence of a `merged` reason then says nothing about the branch.
    Undetermined { reason: String },
}

/// What to do when the mainline branch is missing on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMainline {
    /// Fail the whole run with `MainlineNotFound`.
    #[default]
    Fail,
    /// Skip the merge check and still report stale branches.
    StaleOnly,
}

/// Inputs for a classification run.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Remote whose branches are classified.
    pub remote: String,
    /// Mainline branch name on that remote.
    pub mainline: String,
    /// Extra branch names to leave alone.
    pub skip: Vec<String>,
    /// Branches whose newest commit predates this instant are stale.
    /// `None` disables the staleness criterion.
    pub cutoff: Option<DateTime<Utc>>,
    pub missing_mainline: MissingMainline,
}

impl ClassifyOptions {
    /// Options for `remote`/`mainline` with no skips and no staleness check.
    pub fn new(remote: impl Into<String>, mainline: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            mainline: mainline.into(),
            skip: Vec::new(),
            cutoff: None,
            missing_mainline: MissingMainline::Fail,
        }
    }
}

/// Ordered, deduplicated deletion candidates for one remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub remote: String,
    pub mainline: String,
    pub merge_check: MergeCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<DateTime<Utc>>,
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedBranch>,
}

impl Report {
    /// Check if there is nothing to delete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidates with the merged reason.
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.merged).count()
    }

    /// Number of candidates with the stale reason.
    #[must_use]
    pub fn stale_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.stale.is_some()).count()
    }
}

/// Combine classifier output into ordered candidates.
///
/// Merged branches come first in merge-scan order (carrying staleness when
/// they are also stale), then stale-only branches in stale-scan order.
/// Branches that either scan could not read are dropped from both.
#[must_use]
pub fn build_candidates(
    merged: &[RemoteRef],
    stale: &[StaleBranch],
    unreadable: &[SkippedBranch],
) -> Vec<Candidate> {
    let excluded: HashSet<(&str, &str)> = unreadable
        .iter()
        .map(|s| (s.branch.remote.as_str(), s.branch.name.as_str()))
        .collect();
    let is_excluded = |r: &RemoteRef| excluded.contains(&(r.remote.as_str(), r.name.as_str()));

    let staleness_of = |branch: &RemoteRef| {
        stale
            .iter()
            .find(|s| s.branch.same_branch(branch))
            .map(|s| Staleness {
                last_commit: s.last_commit,
                age_days: s.age_days,
            })
    };

    let mut candidates: Vec<Candidate> = Vec::with_capacity(merged.len() + stale.len());

    for branch in merged.iter().filter(|b| !is_excluded(*b)) {
        if candidates.iter().any(|c| c.branch.same_branch(branch)) {
            continue;
        }
        candidates.push(Candidate {
            branch: branch.clone(),
            merged: true,
            stale: staleness_of(branch),
        });
    }

    for entry in stale.iter().filter(|s| !is_excluded(&s.branch)) {
        if candidates.iter().any(|c| c.branch.same_branch(&entry.branch)) {
            continue;
        }
        candidates.push(Candidate {
            branch: entry.branch.clone(),
            merged: false,
            stale: Some(Staleness {
                last_commit: entry.last_commit,
                age_days: entry.age_days,
            }),
        });
    }

    candidates
}

/// Classify the branches of `options.remote` and build the report.
///
/// # Errors
/// `RemoteUnavailable` if the remote is not configured, `MainlineNotFound`
/// if mainline is missing and the policy is [`MissingMainline::Fail`], or
/// `Git` if the remote refs cannot be listed.
pub fn classify<G: GitOps>(git: &G, options: &ClassifyOptions) -> Result<Report> {
    let remote = options.remote.as_str();
    if !git.remote_exists(remote) {
        return Err(Error::RemoteUnavailable(remote.to_string()));
    }

    let refs = git.remote_refs(remote).map_err(|e| match e {
        sweep_git::Error::RemoteNotFound(name) => Error::RemoteUnavailable(name),
        other => Error::Git(other),
    })?;

    let mainline = match git.resolve_remote_ref(remote, &options.mainline) {
        Ok(mainline) => Some(mainline),
        Err(sweep_git::Error::RefNotFound(_)) => None,
        Err(sweep_git::Error::RemoteNotFound(name)) => return Err(Error::RemoteUnavailable(name)),
        Err(e) => return Err(Error::Git(e)),
    };

    let not_found = || Error::MainlineNotFound {
        remote: remote.to_string(),
        branch: options.mainline.clone(),
    };

    let skip = SkipSet::new(&options.mainline, options.skip.iter().map(String::as_str));

    let (merge_scan, merge_check, baseline) = match mainline {
        Some(mainline) => {
            let scan = compute_merged(git, &refs, &mainline, &skip);
            (scan, MergeCheck::Performed, mainline)
        }
        None => match options.missing_mainline {
            MissingMainline::Fail => return Err(not_found()),
            MissingMainline::StaleOnly => {
                let check = MergeCheck::Undetermined {
                    reason: not_found().to_string(),
                };
                // The mainline name is already skipped; this only stands in for the filter.
                let placeholder = RemoteRef::new(remote, &options.mainline, sweep_git::Oid::zero());
                (MergeScan::default(), check, placeholder)
            }
        },
    };

    let stale_scan = options
        .cutoff
        .map(|cutoff| compute_stale(git, &refs, &baseline, &skip, cutoff))
        .unwrap_or_default();

    let skipped = merge_unreadable(merge_scan.unreadable, stale_scan.unreadable);
    let candidates = build_candidates(&merge_scan.merged, &stale_scan.stale, &skipped);

    Ok(Report {
        remote: remote.to_string(),
        mainline: options.mainline.clone(),
        merge_check,
        cutoff: options.cutoff,
        candidates,
        skipped,
    })
}

fn merge_unreadable(
    mut first: Vec<SkippedBranch>,
    second: Vec<SkippedBranch>,
) -> Vec<SkippedBranch> {
    for entry in second {
        if !first.iter().any(|s| s.branch.same_branch(&entry.branch)) {
            first.push(entry);
        }
    }
    first
}
