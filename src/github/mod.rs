//! GitHub API client module
//!
//! This module provides the REST calls needed to provision an organization:
//! repository and team lookups, creation, permission grants and team-sync
//! group mappings.

mod client;
pub mod rate_limit;
pub mod repos;
pub mod team_repos;
pub mod teams;
pub mod traits;

pub use client::GitHubClient;
pub use repos::{CreateRepositoryRequest, Repository, RepositorySettings};
pub use team_repos::Permission;
pub use teams::{team_slug, CreateTeamRequest, IdpGroup, Team, TeamPrivacy};
pub use traits::OrgApi;
