//! In-memory [`OrgApi`] used by provisioner tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::cli::Stage;
use crate::config::Config;
use crate::error::{ProvisionError, Result};
use crate::github::{
    team_slug, CreateRepositoryRequest, CreateTeamRequest, IdpGroup, OrgApi, Permission,
    Repository, Team,
};

/// Configuration for organization `acme`
pub fn config(dry_run: bool) -> Config {
    Config {
        token: "test-token".to_string(),
        org: "acme".to_string(),
        api_url: "http://localhost".to_string(),
        csv_dir: "csv".into(),
        dry_run,
        stages: Stage::ALL.to_vec(),
    }
}

/// Request recorded by [`FakeApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetRepository {
        owner: String,
        repo: String,
    },
    CreateRepository {
        org: String,
        request: CreateRepositoryRequest,
    },
    GetTeam {
        org: String,
        slug: String,
    },
    CreateTeam {
        org: String,
        request: CreateTeamRequest,
    },
    MapGroups {
        org: String,
        slug: String,
        groups: Vec<IdpGroup>,
    },
    Grant {
        org: String,
        slug: String,
        owner: String,
        repo: String,
        permission: Permission,
    },
}

#[derive(Default)]
pub struct FakeApi {
    /// Names of repositories that exist
    pub repos: HashSet<String>,
    /// Slugs of teams that exist
    pub teams: HashSet<String>,
    /// Lookups answering with an error status, keyed by repo name or team slug
    pub lookup_errors: HashMap<String, u16>,
    /// Repository names / team names whose creation fails
    pub create_errors: HashSet<String>,
    /// Slug the server assigns to created teams, instead of the derived one
    pub assigned_slug: Option<String>,
    pub fail_group_mapping: bool,
    pub fail_grant: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repos(mut self, names: &[&str]) -> Self {
        self.repos.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_teams(mut self, slugs: &[&str]) -> Self {
        self.teams.extend(slugs.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_lookup_error(mut self, key: &str, status: u16) -> Self {
        self.lookup_errors.insert(key.to_string(), status);
        self
    }

    pub fn with_create_error(mut self, name: &str) -> Self {
        self.create_errors.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    /// Number of requests that would change remote state
    pub fn mutations(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                Call::CreateRepository { .. }
                    | Call::CreateTeam { .. }
                    | Call::MapGroups { .. }
                    | Call::Grant { .. }
            )
        })
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn lookup_error(&self, key: &str) -> Option<ProvisionError> {
        self.lookup_errors
            .get(key)
            .map(|status| ProvisionError::Api {
                status: *status,
                message: format!("lookup of '{}' failed", key),
            })
    }
}

fn rejected(what: &str) -> ProvisionError {
    ProvisionError::Api {
        status: 422,
        message: format!("{} rejected", what),
    }
}

impl OrgApi for FakeApi {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Option<Repository>> {
        self.record(Call::GetRepository {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
        if let Some(err) = self.lookup_error(repo) {
            return Err(err);
        }
        Ok(self.repos.contains(repo).then(|| Repository {
            id: 1,
            name: repo.to_string(),
            full_name: Some(format!("{}/{}", owner, repo)),
            private: Some(true),
            html_url: None,
        }))
    }

    async fn create_repository(
        &self,
        org: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository> {
        self.record(Call::CreateRepository {
            org: org.to_string(),
            request: request.clone(),
        });
        if self.create_errors.contains(&request.name) {
            return Err(rejected("repository creation"));
        }
        Ok(Repository {
            id: 2,
            name: request.name.clone(),
            full_name: Some(format!("{}/{}", org, request.name)),
            private: Some(request.private),
            html_url: None,
        })
    }

    async fn get_team(&self, org: &str, slug: &str) -> Result<Option<Team>> {
        self.record(Call::GetTeam {
            org: org.to_string(),
            slug: slug.to_string(),
        });
        if let Some(err) = self.lookup_error(slug) {
            return Err(err);
        }
        Ok(self.teams.contains(slug).then(|| Team {
            id: 3,
            name: slug.to_string(),
            slug: slug.to_string(),
            description: None,
            privacy: Some("closed".to_string()),
            html_url: None,
        }))
    }

    async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<Team> {
        self.record(Call::CreateTeam {
            org: org.to_string(),
            request: request.clone(),
        });
        if self.create_errors.contains(&request.name) {
            return Err(rejected("team creation"));
        }
        Ok(Team {
            id: 4,
            name: request.name.clone(),
            slug: self
                .assigned_slug
                .clone()
                .unwrap_or_else(|| team_slug(&request.name)),
            description: Some(request.description.clone()),
            privacy: Some(request.privacy.to_string()),
            html_url: None,
        })
    }

    async fn update_team_group_mappings(
        &self,
        org: &str,
        team_slug: &str,
        groups: &[IdpGroup],
    ) -> Result<()> {
        self.record(Call::MapGroups {
            org: org.to_string(),
            slug: team_slug.to_string(),
            groups: groups.to_vec(),
        });
        if self.fail_group_mapping {
            return Err(rejected("group mapping"));
        }
        Ok(())
    }

    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> Result<()> {
        self.record(Call::Grant {
            org: org.to_string(),
            slug: team_slug.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            permission,
        });
        if self.fail_grant {
            return Err(rejected("permission grant"));
        }
        Ok(())
    }
}
