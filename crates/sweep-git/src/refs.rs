//! Remote-tracking branch references.

use std::fmt;

use git2::Oid;
use serde::{Serialize, Serializer};

/// A remote-tracking branch, e.g. `refs/remotes/origin/feature/login`.
///
/// Identity is `(remote, name)`; `target` is the commit the ref pointed at
/// when it was enumerated and is what history queries resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RemoteRef {
    /// Name of the remote (e.g. `origin`).
    pub remote: String,
    /// Branch name without the remote prefix (e.g. `feature/login`).
    pub name: String,
    /// Commit the reference points at.
    #[serde(serialize_with = "serialize_oid")]
    pub target: Oid,
}

impl RemoteRef {
    /// Create a new remote reference.
    pub fn new(remote: impl Into<String>, name: impl Into<String>, target: Oid) -> Self {
        Self {
            remote: remote.into(),
            name: name.into(),
            target,
        }
    }

    /// Full reference name, e.g. `refs/remotes/origin/feature/login`.
    #[must_use]
    pub fn refname(&self) -> String {
        format!("refs/remotes/{}/{}", self.remote, self.name)
    }

    /// Whether this ref and `other` denote the same remote branch.
    #[must_use]
    pub fn same_branch(&self, other: &Self) -> bool {
        self.remote == other.remote && self.name == other.name
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.name)
    }
}

fn serialize_oid<S: Serializer>(oid: &Oid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&oid.to_string())
}
