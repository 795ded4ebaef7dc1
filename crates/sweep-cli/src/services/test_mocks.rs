//! Mock implementations for testing services.
//!
//! This mock implements `GitOps` from sweep-git to enable unit testing of
//! service logic without real git repos.

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use sweep_git::{GitOps, Oid, RemoteRef, Result as GitResult};

/// Midnight UTC on the given day.
#[allow(clippy::unwrap_used)]
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Mock implementation of `GitOps` for testing.
///
/// Every branch lives on `origin`; its history is a list of commit times.
pub struct MockGitOps {
    pub remotes: RefCell<HashSet<String>>,
    pub branches: RefCell<Vec<(RemoteRef, Vec<DateTime<Utc>>)>>,
    pub merged: RefCell<HashSet<String>>,
    pub failing_deletes: RefCell<HashSet<String>>,
    pub fetch_fails: RefCell<bool>,
    pub fetched: RefCell<Vec<String>>,
    pub deleted: RefCell<Vec<String>>,
    pub history_walks: RefCell<Vec<String>>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            remotes: RefCell::new(HashSet::from(["origin".to_string()])),
            branches: RefCell::new(Vec::new()),
            merged: RefCell::new(HashSet::new()),
            failing_deletes: RefCell::new(HashSet::new()),
            fetch_fails: RefCell::new(false),
            fetched: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
            history_walks: RefCell::new(Vec::new()),
        }
    }

    #[allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
    pub fn with_branch(self, name: &str, commits: &[DateTime<Utc>], merged: bool) -> Self {
        let mut bytes = [0u8; 20];
        bytes[0] = self.branches.borrow().len() as u8 + 1;
        let target = Oid::from_bytes(&bytes).unwrap();

        self.branches
            .borrow_mut()
            .push((RemoteRef::new("origin", name, target), commits.to_vec()));
        if merged {
            self.merged.borrow_mut().insert(name.to_string());
        }
        self
    }

    pub fn with_remote(self, remote: &str) -> Self {
        self.remotes.borrow_mut().insert(remote.to_string());
        self
    }

    pub fn with_fetch_error(self) -> Self {
        *self.fetch_fails.borrow_mut() = true;
        self
    }

    pub fn with_failing_delete(self, name: &str) -> Self {
        self.failing_deletes.borrow_mut().insert(name.to_string());
        self
    }

    fn history(&self, name: &str) -> Vec<DateTime<Utc>> {
        self.branches
            .borrow()
            .iter()
            .find(|(r, _)| r.name == name)
            .map(|(_, times)| times.clone())
            .unwrap_or_default()
    }
}

impl GitOps for MockGitOps {
    fn remote_exists(&self, remote: &str) -> bool {
        self.remotes.borrow().contains(remote)
    }

    fn remote_refs(&self, remote: &str) -> GitResult<Vec<RemoteRef>> {
        if !self.remote_exists(remote) {
            return Err(sweep_git::Error::RemoteNotFound(remote.to_string()));
        }
        Ok(self
            .branches
            .borrow()
            .iter()
            .filter(|(r, _)| r.remote == remote)
            .map(|(r, _)| r.clone())
            .collect())
    }

    fn resolve_remote_ref(&self, remote: &str, branch: &str) -> GitResult<RemoteRef> {
        self.remote_refs(remote)?
            .into_iter()
            .find(|r| r.name == branch)
            .ok_or_else(|| sweep_git::Error::RefNotFound(format!("{remote}/{branch}")))
    }

    fn is_merged_into(&self, candidate: &RemoteRef, baseline: &RemoteRef) -> GitResult<bool> {
        Ok(candidate.target == baseline.target || self.merged.borrow().contains(&candidate.name))
    }

    fn commit_times(&self, branch: &RemoteRef) -> GitResult<Vec<DateTime<Utc>>> {
        self.history_walks.borrow_mut().push(branch.name.clone());
        Ok(self.history(&branch.name))
    }

    fn fetch(&self, remote: &str) -> GitResult<()> {
        if *self.fetch_fails.borrow() {
            return Err(sweep_git::Error::FetchFailed("could not read from remote".into()));
        }
        self.fetched.borrow_mut().push(remote.to_string());
        Ok(())
    }

    fn delete_remote_branch(&self, branch: &RemoteRef) -> GitResult<()> {
        if self.failing_deletes.borrow().contains(&branch.name) {
            return Err(sweep_git::Error::PushFailed(format!(
                "remote rejected deletion of {}",
                branch.name
            )));
        }
        self.deleted.borrow_mut().push(branch.name.clone());
        Ok(())
    }
}
