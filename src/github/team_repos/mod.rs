//! Team repositories module - grant teams access to repositories

mod api;
mod models;

pub use models::Permission;
