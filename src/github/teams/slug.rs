//! Team slug derivation

/// Derive the team slug used to address a team in API paths
///
/// Lowercases the display name and replaces every space with `-`, so
/// `"Platform Team"` becomes `"platform-team"`. Consecutive spaces each become
/// a hyphen.
pub fn team_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
