//! Team API operations

use log::debug;

use crate::error::Result;
use crate::github::GitHubClient;

use super::models::{CreateTeamRequest, GroupMappingsRequest, IdpGroup, Team};

impl GitHubClient {
    /// Get a team by slug within an organization
    ///
    /// Returns `Ok(None)` when no team has that slug.
    pub async fn get_team(&self, org: &str, team_slug: &str) -> Result<Option<Team>> {
        let url = format!(
            "{}/orgs/{}/teams/{}",
            self.base_url(),
            urlencoding::encode(org),
            urlencoding::encode(team_slug)
        );

        self.fetch_optional(&url, &format!("team '{}' in '{}'", team_slug, org))
            .await
    }

    /// Create a team in an organization
    pub async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<Team> {
        let url = format!("{}/orgs/{}/teams", self.base_url(), urlencoding::encode(org));

        debug!(
            "Creating team {} ({}) in {}",
            request.name, request.privacy, org
        );

        let response = self.send(|| self.post(&url).json(request)).await?;

        match response.status().as_u16() {
            200 | 201 => Ok(response.json().await?),
            _ => Err(Self::api_error(
                response,
                &format!("Failed to create team '{}' in '{}'", request.name, org),
            )
            .await),
        }
    }

    /// Replace the identity-provider groups connected to a team
    ///
    /// Requires team synchronization to be enabled for the organization.
    pub async fn update_team_group_mappings(
        &self,
        org: &str,
        team_slug: &str,
        groups: &[IdpGroup],
    ) -> Result<()> {
        let url = format!(
            "{}/orgs/{}/teams/{}/team-sync/group-mappings",
            self.base_url(),
            urlencoding::encode(org),
            urlencoding::encode(team_slug)
        );

        debug!(
            "Mapping {} identity-provider group(s) to team {}",
            groups.len(),
            team_slug
        );

        let body = GroupMappingsRequest { groups };
        let response = self.send(|| self.patch(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 | 204 => Ok(()),
            _ => Err(Self::api_error(
                response,
                &format!("Failed to map identity-provider groups to team '{}'", team_slug),
            )
            .await),
        }
    }
}
