//! Repository API operations

use log::debug;

use crate::error::Result;
use crate::github::GitHubClient;

use super::models::{CreateRepositoryRequest, Repository};

impl GitHubClient {
    /// Get a repository by owner and name
    ///
    /// Returns `Ok(None)` when the repository does not exist.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Option<Repository>> {
        let url = format!(
            "{}/repos/{}/{}",
            self.base_url(),
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );

        self.fetch_optional(&url, &format!("repository '{}/{}'", owner, repo))
            .await
    }

    /// Create a repository in an organization
    pub async fn create_repository(
        &self,
        org: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository> {
        let url = format!("{}/orgs/{}/repos", self.base_url(), urlencoding::encode(org));

        debug!("Creating repository {} in {}", request.name, org);

        let response = self.send(|| self.post(&url).json(request)).await?;

        match response.status().as_u16() {
            200 | 201 => Ok(response.json().await?),
            _ => Err(Self::api_error(
                response,
                &format!("Failed to create repository '{}' in '{}'", request.name, org),
            )
            .await),
        }
    }
}
