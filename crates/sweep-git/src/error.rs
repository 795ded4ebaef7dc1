//! Error types for sweep-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// Remote is not configured in this repository.
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// Remote-tracking reference not found.
    #[error("reference not found: {0}")]
    RefNotFound(String),

    /// Commit history of a reference could not be walked.
    #[error("cannot read history of {reference}: {message}")]
    HistoryUnreadable {
        /// The reference being walked.
        reference: String,
        /// What went wrong.
        message: String,
    },

    /// Fetch failed.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Push (branch deletion) failed.
    #[error("push failed: {0}")]
    PushFailed(String),

    /// The `git` binary could not be launched.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
