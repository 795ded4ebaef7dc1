//! In-memory `GitOps` used by the classifier tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeZone, Utc};
use sweep_git::{GitOps, Oid, RemoteRef, Result as GitResult};

pub const REMOTE: &str = "origin";

/// Midnight UTC on the given day.
#[allow(clippy::unwrap_used)]
pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Deterministic, distinct commit id per branch index.
#[allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
fn oid(index: usize) -> Oid {
    let mut bytes = [0u8; 20];
    bytes[19] = index as u8 + 1;
    Oid::from_bytes(&bytes).unwrap()
}

pub struct MockGitOps {
    remotes: HashSet<String>,
    refs: Vec<RemoteRef>,
    merged: HashSet<String>,
    times: HashMap<String, Vec<DateTime<Utc>>>,
    unreadable: HashSet<String>,
    failing_deletes: HashSet<String>,
    pub merge_checks: RefCell<Vec<String>>,
    pub history_walks: RefCell<Vec<String>>,
    pub deleted: RefCell<Vec<String>>,
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            remotes: HashSet::from([REMOTE.to_string()]),
            refs: Vec::new(),
            merged: HashSet::new(),
            times: HashMap::new(),
            unreadable: HashSet::new(),
            failing_deletes: HashSet::new(),
            merge_checks: RefCell::new(Vec::new()),
            history_walks: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    /// Add a branch with the given commit times. Enumeration order is insertion order.
    pub fn with_branch(mut self, name: &str, times: &[DateTime<Utc>]) -> Self {
        let target = oid(self.refs.len());
        self.refs.push(RemoteRef::new(REMOTE, name, target));
        self.times.insert(name.to_string(), times.to_vec());
        self
    }

    /// Add a branch pointing at the same commit as `other`.
    pub fn with_alias(mut self, name: &str, other: &str) -> Self {
        let source = self
            .refs
            .iter()
            .find(|r| r.name == other)
            .cloned()
            .map(|r| (r.target, self.times.get(other).cloned().unwrap_or_default()));
        if let Some((target, times)) = source {
            self.refs.push(RemoteRef::new(REMOTE, name, target));
            self.times.insert(name.to_string(), times);
        }
        self
    }

    pub fn with_merged(mut self, name: &str, times: &[DateTime<Utc>]) -> Self {
        self.merged.insert(name.to_string());
        self.with_branch(name, times)
    }

    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.unreadable.insert(name.to_string());
        self
    }

    pub fn with_failing_delete(mut self, name: &str) -> Self {
        self.failing_deletes.insert(name.to_string());
        self
    }

    pub fn without_remote(mut self) -> Self {
        self.remotes.clear();
        self
    }

    pub fn refs(&self) -> Vec<RemoteRef> {
        self.refs.clone()
    }

    pub fn find(&self, name: &str) -> RemoteRef {
        self.refs
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .unwrap_or_else(|| RemoteRef::new(REMOTE, name, Oid::zero()))
    }

    fn unreadable_error(branch: &RemoteRef) -> sweep_git::Error {
        sweep_git::Error::HistoryUnreadable {
            reference: branch.to_string(),
            message: "object not found".to_string(),
        }
    }
}

impl GitOps for MockGitOps {
    fn remote_exists(&self, remote: &str) -> bool {
        self.remotes.contains(remote)
    }

    fn remote_refs(&self, remote: &str) -> GitResult<Vec<RemoteRef>> {
        if !self.remote_exists(remote) {
            return Err(sweep_git::Error::RemoteNotFound(remote.to_string()));
        }
        Ok(self.refs.clone())
    }

    fn resolve_remote_ref(&self, remote: &str, branch: &str) -> GitResult<RemoteRef> {
        if !self.remote_exists(remote) {
            return Err(sweep_git::Error::RemoteNotFound(remote.to_string()));
        }
        self.refs
            .iter()
            .find(|r| r.name == branch)
            .cloned()
            .ok_or_else(|| sweep_git::Error::RefNotFound(format!("{remote}/{branch}")))
    }

    fn is_merged_into(&self, candidate: &RemoteRef, baseline: &RemoteRef) -> GitResult<bool> {
        self.merge_checks.borrow_mut().push(candidate.name.clone());
        if self.unreadable.contains(&candidate.name) {
            return Err(Self::unreadable_error(candidate));
        }
        Ok(candidate.target == baseline.target || self.merged.contains(&candidate.name))
    }

    fn commit_times(&self, branch: &RemoteRef) -> GitResult<Vec<DateTime<Utc>>> {
        self.history_walks.borrow_mut().push(branch.name.clone());
        if self.unreadable.contains(&branch.name) {
            return Err(Self::unreadable_error(branch));
        }
        Ok(self.times.get(&branch.name).cloned().unwrap_or_default())
    }

    fn fetch(&self, remote: &str) -> GitResult<()> {
        if self.remote_exists(remote) {
            Ok(())
        } else {
            Err(sweep_git::Error::RemoteNotFound(remote.to_string()))
        }
    }

    fn delete_remote_branch(&self, branch: &RemoteRef) -> GitResult<()> {
        if self.failing_deletes.contains(&branch.name) {
            return Err(sweep_git::Error::PushFailed(format!(
                "remote rejected deletion of {}",
                branch.name
            )));
        }
        self.deleted.borrow_mut().push(branch.name.clone());
        Ok(())
    }
}
