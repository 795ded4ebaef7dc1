//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the repository
//! capabilities git-sweep needs, enabling dependency injection and testability.

use chrono::{DateTime, Utc};

use crate::{RemoteRef, Result};

/// Trait for repository operations used to find and delete remote branches.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection in the classifiers and CLI services
/// - Mock implementations for testing
///
/// Everything except [`GitOps::fetch`] and [`GitOps::delete_remote_branch`]
/// is read-only.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Remotes ===

    /// Check if a remote with this name is configured.
    fn remote_exists(&self, remote: &str) -> bool;

    // === Remote-tracking refs ===

    /// List the remote-tracking branches of `remote`, sorted by name.
    ///
    /// Fails with `RemoteNotFound` if the remote is not configured.
    fn remote_refs(&self, remote: &str) -> Result<Vec<RemoteRef>>;

    /// Resolve a single remote-tracking branch.
    ///
    /// Fails with `RefNotFound` if `remote/branch` does not exist locally.
    fn resolve_remote_ref(&self, remote: &str, branch: &str) -> Result<RemoteRef>;

    // === History ===

    /// Check whether `candidate` introduces no commits that `baseline` lacks.
    ///
    /// Merge commits on `candidate` are ignored. A branch whose changes were
    /// cherry-picked or rebased into `baseline` still has commits of its own
    /// and is not merged.
    fn is_merged_into(&self, candidate: &RemoteRef, baseline: &RemoteRef) -> Result<bool>;

    /// Commit times of every commit reachable from `branch`, in no particular order.
    fn commit_times(&self, branch: &RemoteRef) -> Result<Vec<DateTime<Utc>>>;

    // === Remote Operations ===

    /// Refresh the remote-tracking refs of `remote`.
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Delete `branch` on its remote.
    fn delete_remote_branch(&self, branch: &RemoteRef) -> Result<()>;
}
