//! Repositories module - look up and create organization repositories

mod api;
mod models;

pub use models::{CreateRepositoryRequest, Repository, RepositorySettings};
