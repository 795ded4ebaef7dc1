//! Deleting classified branches from the remote.

use sweep_git::{GitOps, RemoteRef};

use crate::error::Error;
use crate::report::Report;

/// The caller's answer to "delete these branches?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// User confirmed the deletion.
    Proceed,
    /// User declined; nothing is deleted.
    Abort,
    /// Deletion was forced without asking.
    ForceProceed,
}

impl Decision {
    /// Map a yes/no answer to a decision.
    #[must_use]
    pub const fn from_confirmation(confirmed: bool) -> Self {
        if confirmed { Self::Proceed } else { Self::Abort }
    }

    /// Whether branches should be deleted.
    #[must_use]
    pub const fn proceeds(self) -> bool {
        matches!(self, Self::Proceed | Self::ForceProceed)
    }
}

/// Result of deleting one branch.
#[derive(Debug)]
pub struct Deletion {
    pub branch: RemoteRef,
    /// `Err` holds a [`Error::DeletionFailed`].
    pub result: Result<(), Error>,
}

impl Deletion {
    /// Check if the branch was deleted.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of a cleanup run.
#[derive(Debug)]
pub enum CleanupOutcome {
    /// The decision was [`Decision::Abort`].
    Aborted,
    /// Every candidate was attempted, in report order.
    Completed(Vec<Deletion>),
}

impl CleanupOutcome {
    /// Deletions that failed.
    pub fn failures(&self) -> impl Iterator<Item = &Deletion> {
        let deletions: &[Deletion] = match self {
            Self::Aborted => &[],
            Self::Completed(deletions) => deletions,
        };
        deletions.iter().filter(|d| !d.is_done())
    }

    /// Check if any deletion failed.
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Delete every candidate in `report` unless `decision` aborts.
///
/// Each deletion is independent: a failure is recorded and the remaining
/// branches are still attempted. `on_deletion` is called after each attempt
/// so callers can report progress.
pub fn run<G, F>(git: &G, report: &Report, decision: Decision, mut on_deletion: F) -> CleanupOutcome
where
    G: GitOps,
    F: FnMut(&Deletion),
{
    if !decision.proceeds() {
        return CleanupOutcome::Aborted;
    }

    let mut deletions = Vec::with_capacity(report.candidates.len());
    for candidate in &report.candidates {
        let result = git
            .delete_remote_branch(&candidate.branch)
            .map_err(|e| Error::DeletionFailed {
                branch: candidate.branch.name.clone(),
                message: e.to_string(),
            });

        let deletion = Deletion {
            branch: candidate.branch.clone(),
            result,
        };
        on_deletion(&deletion);
        deletions.push(deletion);
    }

    CleanupOutcome::Completed(deletions)
}
