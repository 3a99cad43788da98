//! Team repository permission API operations

use log::debug;

use crate::error::Result;
use crate::github::GitHubClient;

use super::models::{Permission, TeamRepoPermissionRequest};

impl GitHubClient {
    /// Add a repository to a team or update the team's permission on it
    pub async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()> {
        let url = format!(
            "{}/orgs/{}/teams/{}/repos/{}/{}",
            self.base_url(),
            urlencoding::encode(org),
            urlencoding::encode(team_slug),
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );

        debug!(
            "Granting {} on {}/{} to team {}",
            permission, owner, repo, team_slug
        );

        let body = TeamRepoPermissionRequest { permission };
        let response = self.send(|| self.put(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 | 204 => Ok(()),
            _ => Err(Self::api_error(
                response,
                &format!(
                    "Failed to grant '{}' on '{}/{}' to team '{}'",
                    permission, owner, repo, team_slug
                ),
            )
            .await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_set_team_repo_permission() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/orgs/acme/teams/platform/repos/acme/svc-a"))
            .and(body_json(serde_json::json!({"permission": "push"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        client
            .set_team_repo_permission("acme", "platform", "acme", "svc-a", Permission::Push)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_team_repo_permission_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/orgs/acme/teams/platform/repos/acme/svc-a"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Validation Failed",
                "errors": [{"message": "Repository must be owned by the organization"}]
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::test_client(&mock_server.uri());
        let err = client
            .set_team_repo_permission("acme", "platform", "acme", "svc-a", Permission::Admin)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("'admin'"));
        assert!(err.to_string().contains("must be owned by the organization"));
    }
}
