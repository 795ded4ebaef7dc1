//! Staleness classifier: remote branches with no recent commits.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sweep_git::{GitOps, RemoteRef};

use crate::error::{Error, Result};
use crate::report::SkippedBranch;
use crate::skip::SkipSet;

/// A branch whose newest commit predates the cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleBranch {
    pub branch: RemoteRef,
    /// Time of the newest commit reachable from the branch.
    pub last_commit: DateTime<Utc>,
    /// Whole days between `last_commit` and the cutoff.
    pub age_days: i64,
}

/// Outcome of checking every eligible branch against the cutoff.
#[derive(Debug, Default)]
pub struct StaleScan {
    /// Stale branches, in enumeration order.
    pub stale: Vec<StaleBranch>,
    /// Branches whose history could not be walked.
    pub unreadable: Vec<SkippedBranch>,
}

/// The instant `days` days before `now`.
///
/// # Errors
/// Returns `Error::CutoffOutOfRange` if that instant predates the earliest
/// representable date.
pub fn cutoff_before(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or(Error::CutoffOutOfRange(days))
}

/// Whole days between two instants, regardless of their order.
#[must_use]
pub fn whole_days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_days().abs()
}

/// Find the branches in `refs` whose newest commit is older than `cutoff`.
///
/// Uses the same exclusions as the merge classifier. Branches without any
/// commit are never stale. Results keep the order of `refs`.
pub fn compute_stale<G: GitOps>(
    git: &G,
    refs: &[RemoteRef],
    mainline: &RemoteRef,
    skip: &SkipSet,
    cutoff: DateTime<Utc>,
) -> StaleScan {
    let mut scan = StaleScan::default();

    for branch in skip.eligible(refs, mainline) {
        let times = match git.commit_times(branch) {
            Ok(times) => times,
            Err(e) => {
                scan.unreadable.push(SkippedBranch::new(branch, &e));
                continue;
            }
        };

        let Some(latest) = times.into_iter().max() else {
            continue;
        };

        if latest < cutoff {
            scan.stale.push(StaleBranch {
                branch: branch.clone(),
                last_commit: latest,
                age_days: whole_days_between(cutoff, latest),
            });
        }
    }

    scan
}
