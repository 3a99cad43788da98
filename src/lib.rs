//! gh-provision - Provision GitHub organizations from CSV files
//!
//! Reads declarative CSV files and brings a GitHub organization in line with
//! them, creating only what is missing.
//!
//! # Stages
//!
//! - `teams.csv`: create teams, optionally mapping an identity-provider group
//! - `repos.csv`: create repositories with the declared merge settings
//! - `permissions.csv`: grant teams a permission level on repositories
//!
//! # Example
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_...
//! export GITHUB_ORGANIZATION=acme
//!
//! # Run every stage with the CSV files in ./csv
//! gh-provision
//!
//! # Only check repositories, changing nothing
//! gh-provision --stage repos --dry-run
//!
//! # Machine-readable report
//! gh-provision --output json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod input;
pub mod output;
pub mod provision;

pub use cli::{Cli, OutputFormat, Stage};
pub use config::Config;
pub use error::{ProvisionError, Result};
pub use github::{GitHubClient, OrgApi};
pub use output::output_report;
pub use provision::{run, Outcome, RunReport, StageReport};
