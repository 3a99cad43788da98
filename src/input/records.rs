//! Row types for the input CSV files
//!
//! Every column is optional at the parsing layer so that a row with a missing
//! value reaches the provisioner, which skips it with a warning instead of
//! failing the whole file. A blank cell is treated exactly like a missing
//! column.

use serde::Deserialize;

use crate::github::{IdpGroup, RepositorySettings};

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// `"false"` disables, anything else (including blank) enables
fn flag_default_on(value: &Option<String>) -> bool {
    present(value) != Some("false")
}

/// Only `"true"` enables
fn flag_default_off(value: &Option<String>) -> bool {
    present(value) == Some("true")
}

/// Row of repos.csv
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Alternative header for `name`
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: Option<String>,
    #[serde(default)]
    pub auto_init: Option<String>,
    #[serde(default)]
    pub allow_squash_merge: Option<String>,
    #[serde(default)]
    pub allow_merge_commit: Option<String>,
    #[serde(default)]
    pub allow_rebase_merge: Option<String>,
    #[serde(default)]
    pub delete_branch_on_merge: Option<String>,
}

impl RepositoryRecord {
    /// Repository name from `name`, falling back to `repository`
    pub fn resolved_name(&self) -> Option<&str> {
        present(&self.name).or_else(|| present(&self.repository))
    }

    pub fn description(&self) -> &str {
        present(&self.description).unwrap_or("")
    }

    pub fn settings(&self) -> RepositorySettings {
        RepositorySettings {
            private: flag_default_on(&self.private),
            auto_init: flag_default_on(&self.auto_init),
            allow_squash_merge: flag_default_on(&self.allow_squash_merge),
            allow_merge_commit: flag_default_on(&self.allow_merge_commit),
            allow_rebase_merge: flag_default_on(&self.allow_rebase_merge),
            delete_branch_on_merge: flag_default_off(&self.delete_branch_on_merge),
        }
    }
}

/// Row of teams.csv
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "idpGroupId")]
    pub idp_group_id: Option<String>,
    #[serde(default, rename = "idpGroupName")]
    pub idp_group_name: Option<String>,
    #[serde(default, rename = "idpGroupDescription")]
    pub idp_group_description: Option<String>,
}

impl TeamRecord {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn privacy(&self) -> Option<&str> {
        present(&self.privacy)
    }

    pub fn description(&self) -> &str {
        present(&self.description).unwrap_or("")
    }

    /// Identity-provider group, only when id, name and description are all set
    pub fn idp_group(&self) -> Option<IdpGroup> {
        Some(IdpGroup {
            group_id: present(&self.idp_group_id)?.to_string(),
            group_name: present(&self.idp_group_name)?.to_string(),
            group_description: present(&self.idp_group_description)?.to_string(),
        })
    }
}

/// Row of permissions.csv
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PermissionRecord {
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
}

impl PermissionRecord {
    pub fn repository(&self) -> Option<&str> {
        present(&self.repository)
    }

    pub fn team(&self) -> Option<&str> {
        present(&self.team)
    }

    pub fn permission(&self) -> Option<&str> {
        present(&self.permission)
    }
}
