//! Organization API seam used by the provisioners

use crate::error::Result;
use crate::github::repos::{CreateRepositoryRequest, Repository};
use crate::github::team_repos::Permission;
use crate::github::teams::{CreateTeamRequest, IdpGroup, Team};
use crate::github::GitHubClient;

/// Remote operations the provisioners rely on
///
/// Lookups return `Ok(None)` for a missing resource and `Err` for every other
/// failure. [`GitHubClient`] is the production implementation; tests drive the
/// provisioners with an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait OrgApi {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Option<Repository>>;

    async fn create_repository(
        &self,
        org: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository>;

    async fn get_team(&self, org: &str, team_slug: &str) -> Result<Option<Team>>;

    async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<Team>;

    async fn update_team_group_mappings(
        &self,
        org: &str,
        team_slug: &str,
        groups: &[IdpGroup],
    ) -> Result<()>;

    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()>;
}

impl OrgApi for GitHubClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Option<Repository>> {
        GitHubClient::get_repository(self, owner, repo).await
    }

    async fn create_repository(
        &self,
        org: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository> {
        GitHubClient::create_repository(self, org, request).await
    }

    async fn get_team(&self, org: &str, team_slug: &str) -> Result<Option<Team>> {
        GitHubClient::get_team(self, org, team_slug).await
    }

    async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<Team> {
        GitHubClient::create_team(self, org, request).await
    }

    async fn update_team_group_mappings(
        &self,
        org: &str,
        team_slug: &str,
        groups: &[IdpGroup],
    ) -> Result<()> {
        GitHubClient::update_team_group_mappings(self, org, team_slug, groups).await
    }

    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()> {
        GitHubClient::set_team_repo_permission(self, org, team_slug, owner, repo, permission)
            .await
    }
}
