//! Configuration management for git-sweep.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// git-sweep configuration loaded from `.git/sweep/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Location of the config file inside a repository's git directory.
    #[must_use]
    pub fn path_in(git_dir: &Path) -> PathBuf {
        git_dir.join("sweep").join("config.toml")
    }

    /// Load config from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

/// General git-sweep settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Remote whose branches are swept.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Mainline branch that merged status is measured against.
    #[serde(default = "default_master")]
    pub master: String,

    /// Branches that are never proposed for deletion.
    #[serde(default)]
    pub skip: Vec<String>,

    /// Treat branches without commits in this many days as stale.
    #[serde(default)]
    pub stale_after_days: Option<u32>,

    /// Whether to fetch the remote before classifying.
    #[serde(default = "default_fetch")]
    pub fetch: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            master: default_master(),
            skip: Vec::new(),
            stale_after_days: None,
            fetch: default_fetch(),
        }
    }
}

fn default_remote() -> String {
    "origin".into()
}

fn default_master() -> String {
    "master".into()
}

const fn default_fetch() -> bool {
    true
}
