//! CLI command definitions and handlers.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod cleanup;
pub mod completions;
pub mod preview;
pub mod utils;

/// git-sweep - Clean up merged and stale branches from your Git remotes.
#[derive(Parser)]
#[command(name = "git-sweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the remote branches that would be deleted.
    Preview {
        #[command(flatten)]
        args: SweepArgs,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete merged and stale branches from the remote.
    Cleanup {
        #[command(flatten)]
        args: SweepArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by `preview` and `cleanup`.
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SweepArgs {
    /// Mainline branch that merged status is measured against [default: master].
    #[arg(long, value_name = "NAME")]
    pub master: Option<String>,

    /// Remote to clean up [default: origin].
    #[arg(long, value_name = "NAME")]
    pub origin: Option<String>,

    /// Comma-separated branch names to leave alone.
    #[arg(long, value_delimiter = ',', value_name = "BRANCHES")]
    pub skip: Vec<String>,

    /// Do not fetch from the remote before looking at its branches.
    #[arg(long)]
    pub nofetch: bool,

    /// Also select branches without a commit in this many days.
    #[arg(
        long = "delete-stale-after-days",
        alias = "delete_stale_after_days",
        value_name = "DAYS"
    )]
    pub stale_after_days: Option<u32>,

    /// Report stale branches even when the mainline branch is missing.
    #[arg(long)]
    pub allow_missing_master: bool,

    /// Delete without asking for confirmation.
    #[arg(long)]
    pub force: bool,
}
