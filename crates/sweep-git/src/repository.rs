//! Repository wrapper providing the git operations git-sweep needs.

use std::path::Path;
use std::process::{Command, Output};

use chrono::{DateTime, Utc};
use git2::Oid;

use crate::error::{Error, Result};
use crate::refs::RemoteRef;
use crate::traits::GitOps;

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| Error::NotARepository)?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    // === Remotes ===

    /// Check if a remote is configured.
    #[must_use]
    pub fn remote_exists(&self, remote: &str) -> bool {
        self.inner.find_remote(remote).is_ok()
    }

    fn require_remote(&self, remote: &str) -> Result<()> {
        if self.remote_exists(remote) {
            Ok(())
        } else {
            Err(Error::RemoteNotFound(remote.into()))
        }
    }

    /// List remote-tracking branches of `remote`, sorted by branch name.
    ///
    /// Symbolic refs such as `origin/HEAD` are resolved and listed under
    /// their own name; dangling ones are left out.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` if the remote is not configured.
    pub fn remote_refs(&self, remote: &str) -> Result<Vec<RemoteRef>> {
        self.require_remote(remote)?;

        let prefix = format!("refs/remotes/{remote}/");
        let mut refs = Vec::new();

        for reference in self.inner.references_glob(&format!("{prefix}*"))? {
            let reference = reference?;
            let Some(name) = reference.name().and_then(|n| n.strip_prefix(&prefix)) else {
                continue;
            };
            let Some(target) = reference.resolve().ok().and_then(|r| r.target()) else {
                continue;
            };
            refs.push(RemoteRef::new(remote, name, target));
        }

        refs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(refs)
    }

    /// Resolve `remote/branch` to a remote-tracking ref.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` if the remote is missing, `RefNotFound`
    /// if the branch has no remote-tracking ref.
    pub fn resolve_remote_ref(&self, remote: &str, branch: &str) -> Result<RemoteRef> {
        self.require_remote(remote)?;

        let refname = format!("refs/remotes/{remote}/{branch}");
        let target = self
            .inner
            .find_reference(&refname)
            .and_then(|r| r.resolve())
            .ok()
            .and_then(|r| r.target())
            .ok_or_else(|| Error::RefNotFound(format!("{remote}/{branch}")))?;

        Ok(RemoteRef::new(remote, branch, target))
    }

    // === History ===

    /// Non-merge commits reachable from `head` but not from `upstream`.
    ///
    /// These are the commits `git cherry upstream head` lists, whether or not
    /// an equivalent change was applied upstream.
    ///
    /// # Errors
    /// Returns error if either history cannot be walked.
    pub fn unique_commits(&self, upstream: Oid, head: Oid) -> Result<Vec<Oid>> {
        if upstream == head {
            return Ok(vec![]);
        }
        self.non_merge_commits(head, upstream)
    }

    /// Non-merge commits reachable from `from` but not from `hide`.
    fn non_merge_commits(&self, from: Oid, hide: Oid) -> Result<Vec<Oid>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push(from)?;
        revwalk.hide(hide)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            if self.inner.find_commit(oid)?.parent_count() <= 1 {
                commits.push(oid);
            }
        }
        Ok(commits)
    }

    /// Check whether `candidate` has no commits missing from `baseline`.
    ///
    /// # Errors
    /// Returns `HistoryUnreadable` if either history cannot be walked.
    pub fn is_merged_into(&self, candidate: &RemoteRef, baseline: &RemoteRef) -> Result<bool> {
        self.unique_commits(baseline.target, candidate.target)
            .map(|unique| unique.is_empty())
            .map_err(|e| unreadable(candidate, &e))
    }

    /// Commit times of every commit reachable from `branch`.
    ///
    /// # Errors
    /// Returns `HistoryUnreadable` if the history cannot be walked.
    pub fn commit_times(&self, branch: &RemoteRef) -> Result<Vec<DateTime<Utc>>> {
        self.walk_commit_times(branch.target)
            .map_err(|e| unreadable(branch, &e))
    }

    fn walk_commit_times(&self, tip: Oid) -> Result<Vec<DateTime<Utc>>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push(tip)?;

        let mut times = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let seconds = commit.time().seconds();
            let time = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
                Error::Git2(git2::Error::from_str(&format!(
                    "commit {} has an out of range timestamp {seconds}",
                    commit.id()
                )))
            })?;
            times.push(time);
        }
        Ok(times)
    }

    // === Remote operations (shell out to git for transport and credentials) ===

    /// Fetch `remote`, pruning remote-tracking refs that no longer exist.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` or `FetchFailed`.
    pub fn fetch(&self, remote: &str) -> Result<()> {
        self.require_remote(remote)?;

        let output = self.git(&["fetch", "--prune", remote])?;
        if !output.status.success() {
            return Err(Error::FetchFailed(stderr_message(&output)));
        }
        Ok(())
    }

    /// Delete `branch` on its remote.
    ///
    /// git also drops the matching remote-tracking ref, so no fetch is
    /// needed afterwards.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` or `PushFailed`.
    pub fn delete_remote_branch(&self, branch: &RemoteRef) -> Result<()> {
        self.require_remote(&branch.remote)?;

        let output = self.git(&["push", &branch.remote, "--delete", &branch.name])?;
        if !output.status.success() {
            return Err(Error::PushFailed(stderr_message(&output)));
        }
        Ok(())
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        let dir = self.workdir().unwrap_or_else(|| self.git_dir());
        Ok(Command::new("git").args(args).current_dir(dir).output()?)
    }

    // === Low-level access ===

    /// Get a reference to the underlying git2 repository.
    ///
    /// Use sparingly - prefer high-level methods.
    #[must_use]
    pub const fn inner(&self) -> &git2::Repository {
        &self.inner
    }
}

fn unreadable(branch: &RemoteRef, error: &Error) -> Error {
    Error::HistoryUnreadable {
        reference: branch.to_string(),
        message: error.to_string(),
    }
}

fn stderr_message(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

impl GitOps for Repository {
    fn remote_exists(&self, remote: &str) -> bool {
        self.remote_exists(remote)
    }

    fn remote_refs(&self, remote: &str) -> Result<Vec<RemoteRef>> {
        self.remote_refs(remote)
    }

    fn resolve_remote_ref(&self, remote: &str, branch: &str) -> Result<RemoteRef> {
        self.resolve_remote_ref(remote, branch)
    }

    fn is_merged_into(&self, candidate: &RemoteRef, baseline: &RemoteRef) -> Result<bool> {
        self.is_merged_into(candidate, baseline)
    }

    fn commit_times(&self, branch: &RemoteRef) -> Result<Vec<DateTime<Utc>>> {
        self.commit_times(branch)
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.fetch(remote)
    }

    fn delete_remote_branch(&self, branch: &RemoteRef) -> Result<()> {
        self.delete_remote_branch(branch)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}
