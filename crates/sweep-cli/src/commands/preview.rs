//! `git-sweep preview` command - Show which remote branches would be deleted.

use anyhow::Result;
use chrono::Utc;

use super::SweepArgs;
use crate::commands::utils;
use crate::output;
use crate::services::SweepService;

/// Run the preview command.
pub fn run(args: &SweepArgs, json: bool) -> Result<()> {
    // Keep stdout clean for the JSON document
    if json {
        output::set_quiet(true);
    }

    let (repo, config) = utils::open_repo_and_config(args)?;
    let service = SweepService::new(&repo, &config);

    utils::fetch_if_enabled(&service, &config)?;
    let report = service.classify(Utc::now())?;
    utils::print_warnings(&report);

    if json {
        output::essential(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    utils::print_report(&report);
    if !report.is_empty() {
        let invocation: Vec<String> = std::env::args().skip(1).collect();
        output::detail(&format!(
            "To delete them, run again with `{}`",
            utils::rerun_hint(&invocation)
        ));
    }

    Ok(())
}
