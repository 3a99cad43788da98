//! Repository data models

use serde::{Deserialize, Serialize};

/// Repository as returned by the GitHub API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Settings applied when creating a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositorySettings {
    pub private: bool,
    pub auto_init: bool,
    pub allow_squash_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub delete_branch_on_merge: bool,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            private: true,
            auto_init: true,
            allow_squash_merge: true,
            allow_merge_commit: true,
            allow_rebase_merge: true,
            delete_branch_on_merge: false,
        }
    }
}

/// Body of `POST /orgs/{org}/repos`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub auto_init: bool,
    pub allow_squash_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub delete_branch_on_merge: bool,
}

impl CreateRepositoryRequest {
    pub fn new(name: &str, description: &str, settings: RepositorySettings) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            private: settings.private,
            auto_init: settings.auto_init,
            allow_squash_merge: settings.allow_squash_merge,
            allow_merge_commit: settings.allow_merge_commit,
            allow_rebase_merge: settings.allow_rebase_merge,
            delete_branch_on_merge: settings.delete_branch_on_merge,
        }
    }
}
