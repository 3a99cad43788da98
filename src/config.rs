//! Runtime configuration and constants

use log::debug;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Stage};
use crate::error::{ProvisionError, Result};

/// Configuration constants for the GitHub REST API
pub mod api {
    /// Public GitHub API endpoint (GitHub Enterprise Server overrides this)
    pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

    /// Pinned REST API version header value
    pub const VERSION: &str = "2022-11-28";

    /// Media type requested on every call
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Retries allowed after a primary rate limit response
    pub const MAX_RATE_LIMIT_RETRIES: u32 = 1;

    /// Upper bound on how long a primary rate limit wait may last (seconds)
    pub const MAX_RATE_LIMIT_WAIT_SECS: u64 = 3600;
}

/// Environment variable names
pub mod env {
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const ORGANIZATION: &str = "GITHUB_ORGANIZATION";
    pub const API_URL: &str = "GITHUB_API_URL";
}

/// Input file names, relative to the CSV directory
pub mod files {
    pub const TEAMS: &str = "teams.csv";
    pub const REPOSITORIES: &str = "repos.csv";
    pub const PERMISSIONS: &str = "permissions.csv";
}

/// Default values for CLI
pub mod defaults {
    /// Directory holding the input CSV files
    pub const CSV_DIR: &str = "csv";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Settings resolved once at startup and passed to every stage
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub org: String,
    pub api_url: String,
    pub csv_dir: PathBuf,
    pub dry_run: bool,
    pub stages: Vec<Stage>,
}

impl Config {
    /// Build the configuration from parsed CLI arguments
    ///
    /// Token and organization are required; a blank value counts as missing.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let token = required(cli.token.as_deref(), env::TOKEN)?;
        let org = required(cli.org.as_deref(), env::ORGANIZATION)?;

        let api_url = match cli.api_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                debug!("Using API URL override: {}", url);
                url.trim_end_matches('/').to_string()
            }
            _ => api::DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            token,
            org,
            api_url,
            csv_dir: cli.csv_dir.clone(),
            dry_run: cli.dry_run,
            stages: Stage::ordered(&cli.stages),
        })
    }

    /// Path of the input file for a stage
    pub fn input_path(&self, stage: Stage) -> PathBuf {
        input_path(&self.csv_dir, stage)
    }
}

/// Path of the input file for a stage inside `csv_dir`
pub fn input_path(csv_dir: &Path, stage: Stage) -> PathBuf {
    let file = match stage {
        Stage::Teams => files::TEAMS,
        Stage::Repos => files::REPOSITORIES,
        Stage::Permissions => files::PERMISSIONS,
    };
    csv_dir.join(file)
}

fn required(value: Option<&str>, env_var: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ProvisionError::Config(format!(
            "{} environment variable not set",
            env_var
        ))),
    }
}
