//! # sweep-git
//!
//! Repository access layer for git-sweep, built on git2-rs.
//! Lists remote-tracking branches, answers merge and history questions
//! about them, and wraps the `git` binary for fetching and deleting
//! branches on the remote.

mod error;
mod refs;
mod repository;
mod traits;

pub use error::{Error, Result};
pub use git2::Oid;
pub use refs::RemoteRef;
pub use repository::Repository;
pub use traits::GitOps;
