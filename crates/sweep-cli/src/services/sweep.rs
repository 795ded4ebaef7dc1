//! Sweep service: fetch, classify and delete remote branches.
//!
//! Shared by `preview` and `cleanup`; the commands only add presentation
//! and the confirmation step.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use sweep_core::cleanup::{self, CleanupOutcome, Decision, Deletion};
use sweep_core::{ClassifyOptions, MissingMainline, Report, cutoff_before};
use sweep_git::GitOps;

/// Settings for one sweep, after merging config file and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub remote: String,
    pub master: String,
    pub skip: Vec<String>,
    pub stale_after_days: Option<u32>,
    pub fetch: bool,
    pub missing_mainline: MissingMainline,
}

impl SweepConfig {
    /// Classification options with the staleness cutoff measured from `now`.
    pub fn classify_options(&self, now: DateTime<Utc>) -> sweep_core::Result<ClassifyOptions> {
        let cutoff = self
            .stale_after_days
            .map(|days| cutoff_before(now, days))
            .transpose()?;

        Ok(ClassifyOptions {
            skip: self.skip.clone(),
            cutoff,
            missing_mainline: self.missing_mainline,
            ..ClassifyOptions::new(&self.remote, &self.master)
        })
    }
}

/// Service for sweeping one remote with trait-based dependencies.
pub struct SweepService<'a, G: GitOps> {
    repo: &'a G,
    config: &'a SweepConfig,
}

impl<'a, G: GitOps> SweepService<'a, G> {
    /// Create a new sweep service.
    pub const fn new(repo: &'a G, config: &'a SweepConfig) -> Self {
        Self { repo, config }
    }

    /// Refresh the remote-tracking refs of the configured remote.
    pub fn fetch(&self) -> Result<()> {
        self.repo
            .fetch(&self.config.remote)
            .map_err(|e| anyhow!("Failed to fetch from '{}': {e}", self.config.remote))
    }

    /// Classify the remote's branches as of `now`.
    pub fn classify(&self, now: DateTime<Utc>) -> Result<Report> {
        let options = self.config.classify_options(now)?;
        let report = sweep_core::classify(self.repo, &options)?;
        Ok(report)
    }

    /// Delete every candidate in `report` unless `decision` aborts.
    pub fn cleanup<F>(&self, report: &Report, decision: Decision, on_deletion: F) -> CleanupOutcome
    where
        F: FnMut(&Deletion),
    {
        cleanup::run(self.repo, report, decision, on_deletion)
    }
}
