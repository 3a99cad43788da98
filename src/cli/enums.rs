//! Value enums for CLI arguments

use clap::ValueEnum;
use serde::Serialize;

/// Provisioning stage
///
/// Declaration order is execution order: teams and repositories must exist
/// before permissions can reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Create missing teams (teams.csv)
    Teams,
    /// Create missing repositories (repos.csv)
    Repos,
    /// Grant team permissions on repositories (permissions.csv)
    Permissions,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 3] = [Stage::Teams, Stage::Repos, Stage::Permissions];

    /// Normalize a user selection into execution order without duplicates
    ///
    /// An empty selection means every stage.
    pub fn ordered(selected: &[Stage]) -> Vec<Stage> {
        if selected.is_empty() {
            return Self::ALL.to_vec();
        }
        let mut stages = selected.to_vec();
        stages.sort();
        stages.dedup();
        stages
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Teams => write!(f, "teams"),
            Stage::Repos => write!(f, "repos"),
            Stage::Permissions => write!(f, "permissions"),
        }
    }
}

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
