//! Teams module - look up and create teams, link identity-provider groups

mod api;
mod models;
mod slug;

pub use models::{CreateTeamRequest, IdpGroup, Team, TeamPrivacy};
pub use slug::team_slug;
