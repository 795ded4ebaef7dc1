use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sweep_core::config::GeneralConfig;
use sweep_core::{Config, MergeCheck, MissingMainline, Report};
use sweep_git::{GitOps, Repository};

use super::SweepArgs;
use crate::output;
use crate::services::{SweepConfig, SweepService};

/// Helper to open the repository and resolve settings for this run.
pub fn open_repo_and_config(args: &SweepArgs) -> Result<(Repository, SweepConfig)> {
    let repo = Repository::open_current().context("Not inside a git repository")?;
    let path = Config::path_in(repo.git_dir());
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    Ok((repo, resolve_config(&config.general, args)))
}

/// Merge config file settings with command-line flags.
///
/// Flags win over the file; `--skip` names are added to the configured ones.
pub fn resolve_config(general: &GeneralConfig, args: &SweepArgs) -> SweepConfig {
    let mut skip = general.skip.clone();
    for name in &args.skip {
        if !skip.contains(name) {
            skip.push(name.clone());
        }
    }

    SweepConfig {
        remote: args.origin.clone().unwrap_or_else(|| general.remote.clone()),
        master: args.master.clone().unwrap_or_else(|| general.master.clone()),
        skip,
        stale_after_days: args.stale_after_days.or(general.stale_after_days),
        fetch: general.fetch && !args.nofetch,
        missing_mainline: if args.allow_missing_master {
            MissingMainline::StaleOnly
        } else {
            MissingMainline::Fail
        },
    }
}

/// Fetch the remote unless disabled, showing a spinner while it runs.
pub fn fetch_if_enabled<G: GitOps>(
    service: &SweepService<'_, G>,
    config: &SweepConfig,
) -> Result<()> {
    if !config.fetch {
        return Ok(());
    }

    output::info("Fetching from the remote");
    let spinner = if output::is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("git fetch --prune {}", config.remote));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = service.fetch();
    spinner.finish_and_clear();
    result
}

/// Warn about anything that limits what the report can say.
pub fn print_warnings(report: &Report) {
    for warning in warnings(report) {
        output::warn(&warning);
    }
}

fn warnings(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    if let MergeCheck::Undetermined { reason } = &report.merge_check {
        lines.push(format!("Merged branches were not checked: {reason}"));
    }
    for skipped in &report.skipped {
        lines.push(skipped.to_error().to_string());
    }
    lines
}

/// Print the candidate list, or a note that there is nothing to clean up.
pub fn print_report(report: &Report) {
    if report.is_empty() {
        output::detail("No remote branches are available for cleaning up");
        return;
    }

    if report.merged_count() > 0 {
        output::detail(&format!(
            "These branches have been merged into {}:",
            report.mainline
        ));
    } else {
        output::detail("These branches are stale:");
    }
    output::detail("");
    for candidate in &report.candidates {
        output::detail(&output::candidate_line(candidate));
    }
    output::detail("");
}

/// Suggested command to run the deletion with the same arguments.
///
/// `args` are the process arguments without the program name.
pub fn rerun_hint(args: &[String]) -> String {
    let mut replaced = false;
    let words: Vec<String> = args
        .iter()
        .map(|arg| {
            if !replaced && arg == "preview" {
                replaced = true;
                "cleanup".to_string()
            } else if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("'{arg}'")
            } else {
                arg.clone()
            }
        })
        .collect();

    if words.is_empty() {
        "git-sweep cleanup".to_string()
    } else {
        format!("git-sweep {}", words.join(" "))
    }
}
