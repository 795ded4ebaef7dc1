//! Branch names excluded from classification.

use std::collections::BTreeSet;

use sweep_git::RemoteRef;

/// Name git uses for a remote's default-branch pointer (`origin/HEAD`).
pub const REMOTE_HEAD: &str = "HEAD";

/// Set of branch names that are never candidates for deletion.
///
/// Always contains [`REMOTE_HEAD`] and the mainline branch. A fresh set is
/// built for every classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipSet {
    names: BTreeSet<String>,
}

impl SkipSet {
    /// Build the skip set for `mainline` plus caller-supplied names.
    pub fn new<I, S>(mainline: &str, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = extra
            .into_iter()
            .map(Into::<String>::into)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        names.insert(REMOTE_HEAD.to_string());
        names.insert(mainline.to_string());
        Self { names }
    }

    /// Check if `name` is skipped.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Refs eligible for classification, in their original order.
    ///
    /// Drops skipped names and the mainline ref itself.
    pub fn eligible<'a>(
        &'a self,
        refs: &'a [RemoteRef],
        mainline: &'a RemoteRef,
    ) -> impl Iterator<Item = &'a RemoteRef> + 'a {
        refs.iter()
            .filter(move |r| !r.same_branch(mainline) && !self.contains(&r.name))
    }
}
