//! CLI argument parsing

mod enums;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{defaults, env};

pub use enums::{OutputFormat, Stage};

/// Provision GitHub organization teams, repositories and permissions from CSV files
#[derive(Parser, Debug)]
#[command(name = "gh-provision")]
#[command(version)]
#[command(
    about = "Provision GitHub organization teams, repositories and permissions from CSV files",
    long_about = "Reads teams.csv, repos.csv and permissions.csv from the CSV directory and \
                  creates whatever is missing in the organization. Existing teams and \
                  repositories are left untouched."
)]
pub struct Cli {
    /// GitHub API token
    #[arg(short = 't', long, env = env::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Organization to provision into
    #[arg(short, long, env = env::ORGANIZATION)]
    pub org: Option<String>,

    /// API base URL (GitHub Enterprise Server, e.g. https://ghe.example.com/api/v3)
    #[arg(long, env = env::API_URL)]
    pub api_url: Option<String>,

    /// Directory containing teams.csv, repos.csv and permissions.csv
    #[arg(short = 'd', long, default_value = defaults::CSV_DIR)]
    pub csv_dir: PathBuf,

    /// Only run the given stage(s); stages always run in teams, repos, permissions order
    #[arg(short, long = "stage", value_enum)]
    pub stages: Vec<Stage>,

    /// Check what exists without creating or granting anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
