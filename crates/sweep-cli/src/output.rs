//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use sweep_core::Candidate;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. `--json` turns it on as well.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a line without prefix (suppressed in quiet mode).
///
/// Used for the candidate listing and the hints around it.
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like JSON reports
/// and the list of deleted branches.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Format one candidate for the preview list.
#[must_use]
pub fn candidate_line(candidate: &Candidate) -> String {
    let name = candidate.name();
    match (candidate.merged, candidate.stale) {
        (true, Some(stale)) => format!(
            "  {name} {}",
            format!("(merged, stale since {})", stale.last_commit.format("%Y-%m-%d")).dimmed()
        ),
        (false, Some(stale)) => {
            format!("  {name} is stale ({})", stale.last_commit.format("%Y-%m-%d"))
        }
        (_, None) => format!("  {name}"),
    }
}

/// Format the progress line for one deletion.
#[must_use]
pub fn deletion_line(branch: &str, done: bool) -> String {
    let status = if done {
        "done".green()
    } else {
        "failed".red()
    };
    format!("  deleting {branch} ({status})")
}
