//! Merge classifier: remote branches with no commits missing from mainline.

use sweep_git::{GitOps, RemoteRef};

use crate::report::SkippedBranch;
use crate::skip::SkipSet;

/// Outcome of checking every eligible branch against mainline.
#[derive(Debug, Default)]
pub struct MergeScan {
    /// Merged branches, in enumeration order.
    pub merged: Vec<RemoteRef>,
    /// Branches whose merge status could not be determined.
    pub unreadable: Vec<SkippedBranch>,
}

/// Find the branches in `refs` that are fully merged into `mainline`.
///
/// `mainline` and every name in `skip` are never checked. A branch whose
/// history cannot be read is reported in [`MergeScan::unreadable`] and
/// does not stop the scan.
pub fn compute_merged<G: GitOps>(
    git: &G,
    refs: &[RemoteRef],
    mainline: &RemoteRef,
    skip: &SkipSet,
) -> MergeScan {
    let mut scan = MergeScan::default();

    for branch in skip.eligible(refs, mainline) {
        match git.is_merged_into(branch, mainline) {
            Ok(true) => scan.merged.push(branch.clone()),
            Ok(false) => {}
            Err(e) => scan.unreadable.push(SkippedBranch::new(branch, &e)),
        }
    }

    scan
}
