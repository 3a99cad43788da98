//! Team repository permission models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Permission a team can be granted on a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl Permission {
    /// Accepted values, as written in permissions.csv
    pub const VALUES: [&'static str; 5] = ["pull", "push", "admin", "maintain", "triage"];
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull" => Ok(Permission::Pull),
            "push" => Ok(Permission::Push),
            "admin" => Ok(Permission::Admin),
            "maintain" => Ok(Permission::Maintain),
            "triage" => Ok(Permission::Triage),
            other => Err(format!(
                "invalid permission '{}', expected one of: {}",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Pull => write!(f, "pull"),
            Permission::Triage => write!(f, "triage"),
            Permission::Push => write!(f, "push"),
            Permission::Maintain => write!(f, "maintain"),
            Permission::Admin => write!(f, "admin"),
        }
    }
}

/// Body of `PUT /orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}`
#[derive(Serialize, Debug, Clone, Copy)]
pub(crate) struct TeamRepoPermissionRequest {
    pub permission: Permission,
}
