//! `git-sweep cleanup` command - Delete merged and stale branches from the remote.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use inquire::{Confirm, InquireError};
use sweep_core::{CleanupOutcome, Decision};

use super::SweepArgs;
use crate::commands::utils;
use crate::output;
use crate::services::SweepService;

/// Run the cleanup command.
pub fn run(args: &SweepArgs) -> Result<()> {
    let (repo, config) = utils::open_repo_and_config(args)?;
    let service = SweepService::new(&repo, &config);

    utils::fetch_if_enabled(&service, &config)?;
    let report = service.classify(Utc::now())?;
    utils::print_warnings(&report);
    utils::print_report(&report);

    if report.is_empty() {
        return Ok(());
    }

    let decision = decide(args.force)?;
    let outcome = service.cleanup(&report, decision, |deletion| {
        output::essential(&output::deletion_line(
            &deletion.branch.name,
            deletion.is_done(),
        ));
        if let Err(e) = &deletion.result {
            output::warn(&e.to_string());
        }
    });

    if matches!(outcome, CleanupOutcome::Aborted) {
        output::detail("OK, aborting.");
        return Ok(());
    }

    output::detail("");
    output::success("All done!");
    output::detail("");
    output::detail("Tell everyone to run `git fetch --prune` to sync with this remote.");
    output::detail("(you don't have to, yours is synced)");

    let failed = outcome.failures().count();
    if failed > 0 {
        bail!("Failed to delete {failed} branch(es) from '{}'", config.remote);
    }

    Ok(())
}

/// Ask whether to delete, unless `--force` already answered.
fn decide(force: bool) -> Result<Decision> {
    if force {
        return Ok(Decision::ForceProceed);
    }

    if !console::user_attended() {
        output::warn("Not running in a terminal - use --force to delete without confirmation");
        return Ok(Decision::Abort);
    }

    match Confirm::new("Delete these branches?")
        .with_default(false)
        .prompt()
    {
        Ok(confirmed) => Ok(Decision::from_confirmation(confirmed)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Decision::Abort)
        }
        Err(e) => Err(e).context("Failed to read confirmation"),
    }
}
