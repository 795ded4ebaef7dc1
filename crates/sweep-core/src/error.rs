//! Error types for sweep-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying or deleting remote branches.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named remote is not configured in this repository.
    #[error("remote '{0}' is not configured in this repository")]
    RemoteUnavailable(String),

    /// The mainline branch has no remote-tracking ref on the remote.
    #[error("could not find branch '{branch}' on remote '{remote}' - check the --master and --origin options")]
    MainlineNotFound { remote: String, branch: String },

    /// A branch's history could not be walked.
    #[error("cannot read history of '{branch}': {message}")]
    HistoryUnreadable { branch: String, message: String },

    /// Deleting a branch from the remote failed.
    #[error("failed to delete '{branch}': {message}")]
    DeletionFailed { branch: String, message: String },

    /// The staleness threshold reaches before the earliest representable date.
    #[error("--delete-stale-after-days {0} reaches further back than any supported date")]
    CutoffOutOfRange(u32),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Git operation error.
    #[error("git error: {0}")]
    Git(#[from] sweep_git::Error),
}
