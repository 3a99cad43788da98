//! Team data models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Team as returned by the GitHub API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Team visibility within the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamPrivacy {
    /// Visible to every organization member
    Closed,
    /// Visible only to team members and owners
    Secret,
}

impl FromStr for TeamPrivacy {
    type Err = String;

    /// Exact, case-sensitive match on `closed` or `secret`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closed" => Ok(TeamPrivacy::Closed),
            "secret" => Ok(TeamPrivacy::Secret),
            other => Err(format!(
                "team privacy must be either \"closed\" or \"secret\", got \"{}\"",
                other
            )),
        }
    }
}

impl std::fmt::Display for TeamPrivacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamPrivacy::Closed => write!(f, "closed"),
            TeamPrivacy::Secret => write!(f, "secret"),
        }
    }
}

/// Body of `POST /orgs/{org}/teams`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: String,
    pub privacy: TeamPrivacy,
}

/// External identity-provider group linked to a team
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdpGroup {
    pub group_id: String,
    pub group_name: String,
    pub group_description: String,
}

/// Body of `PATCH /orgs/{org}/teams/{team_slug}/team-sync/group-mappings`
#[derive(Serialize, Debug, Clone)]
pub(crate) struct GroupMappingsRequest<'a> {
    pub groups: &'a [IdpGroup],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_privacy_from_str() {
        assert_eq!("closed".parse::<TeamPrivacy>(), Ok(TeamPrivacy::Closed));
        assert_eq!("secret".parse::<TeamPrivacy>(), Ok(TeamPrivacy::Secret));
        assert!("Closed".parse::<TeamPrivacy>().is_err());
        assert!("visible".parse::<TeamPrivacy>().is_err());
        assert!("".parse::<TeamPrivacy>().is_err());
    }

    #[test]
    fn test_team_deserialize() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "id": 1,
            "node_id": "MDQ6VGVhbTE=",
            "name": "Platform Team",
            "slug": "platform-team",
            "description": null,
            "privacy": "closed",
            "permission": "pull"
        }))
        .unwrap();

        assert_eq!(team.slug, "platform-team");
        assert_eq!(team.privacy.as_deref(), Some("closed"));
        assert!(team.description.is_none());
    }

    #[test]
    fn test_create_team_request_serialization() {
        let request = CreateTeamRequest {
            name: "Platform".to_string(),
            description: String::new(),
            privacy: TeamPrivacy::Secret,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Platform", "description": "", "privacy": "secret"})
        );
    }

    #[test]
    fn test_group_mappings_request_serialization() {
        let groups = [IdpGroup {
            group_id: "abc-123".to_string(),
            group_name: "platform-engineers".to_string(),
            group_description: "Platform engineers".to_string(),
        }];
        let json = serde_json::to_value(GroupMappingsRequest { groups: &groups }).unwrap();
        assert_eq!(json["groups"][0]["group_id"], "abc-123");
        assert_eq!(json["groups"][0]["group_name"], "platform-engineers");
        assert_eq!(json["groups"][0]["group_description"], "Platform engineers");
    }
}
