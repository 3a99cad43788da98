//! Team provisioning

use log::{error, info, warn};

use crate::cli::Stage;
use crate::config::Config;
use crate::error::Result;
use crate::github::{team_slug, CreateTeamRequest, OrgApi, TeamPrivacy};
use crate::input::TeamRecord;

use super::report::{Outcome, StageReport};

/// Create every team in `records` that does not exist yet
///
/// Lookup, creation and group-mapping failures are recorded per team; this
/// stage never aborts the run.
pub async fn provision_teams<A: OrgApi>(
    api: &A,
    config: &Config,
    records: &[TeamRecord],
) -> Result<StageReport> {
    info!("Found {} teams to process", records.len());

    let mut report = StageReport::new(Stage::Teams);
    for (index, record) in records.iter().enumerate() {
        let subject = record
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("record #{}", index + 1));
        let outcome = provision_team(api, config, record).await;
        report.push(subject, outcome);
    }

    info!("Team processing completed: {}", report.summary());
    Ok(report)
}

async fn provision_team<A: OrgApi>(api: &A, config: &Config, record: &TeamRecord) -> Outcome {
    let org = config.org.as_str();

    let Some(name) = record.name() else {
        warn!("Team name missing, skipping entry");
        return Outcome::skipped("team name missing");
    };

    let Some(privacy) = record.privacy() else {
        warn!("Team privacy missing for '{}', skipping entry", name);
        return Outcome::skipped("team privacy missing");
    };

    let privacy: TeamPrivacy = match privacy.parse() {
        Ok(privacy) => privacy,
        Err(reason) => {
            warn!("Team '{}': {}, skipping entry", name, reason);
            return Outcome::skipped(reason);
        }
    };

    let slug = team_slug(name);
    match api.get_team(org, &slug).await {
        Ok(Some(_)) => {
            info!("Team '{}' already exists in {}", name, org);
            return Outcome::Exists;
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error processing team '{}': {}", name, e);
            return Outcome::failed(e);
        }
    }

    let idp_group = record.idp_group();

    if config.dry_run {
        info!("Would create team '{}' ({}) in {}", name, privacy, org);
        if let Some(group) = &idp_group {
            info!(
                "Would map identity-provider group '{}' to team '{}'",
                group.group_name, name
            );
        }
        return Outcome::Planned;
    }

    info!("Creating team '{}' in {}...", name, org);
    let request = CreateTeamRequest {
        name: name.to_string(),
        description: record.description().to_string(),
        privacy,
    };
    let team = match api.create_team(org, &request).await {
        Ok(team) => team,
        Err(e) => {
            error!("Error processing team '{}': {}", name, e);
            return Outcome::failed(e);
        }
    };

    match idp_group {
        Some(group) => {
            // address the new team by the slug GitHub assigned
            let created_slug = if team.slug.is_empty() {
                slug
            } else {
                team.slug
            };
            if let Err(e) = api
                .update_team_group_mappings(org, &created_slug, std::slice::from_ref(&group))
                .await
            {
                error!(
                    "Team '{}' created, but mapping identity-provider group '{}' failed: {}",
                    name, group.group_name, e
                );
                return Outcome::failed(format!("team created, group mapping failed: {}", e));
            }
            info!(
                "Mapped identity-provider group '{}' to team '{}'",
                group.group_name, name
            );
        }
        None => warn!(
            "Missing idpGroupId, idpGroupName, or idpGroupDescription for team '{}', \
             skipping identity-provider group mapping",
            name
        ),
    }

    info!("Team '{}' created successfully", name);
    Outcome::Created
}
