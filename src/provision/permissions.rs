//! Team repository permission assignment

use log::{error, info, warn};

use crate::cli::Stage;
use crate::config::Config;
use crate::error::Result;
use crate::github::{team_slug, OrgApi, Permission};
use crate::input::PermissionRecord;

use super::report::{Outcome, StageReport};

/// Grant each team the listed permission on the listed repository
///
/// Both the repository and the team must already exist; a record naming a
/// missing one is skipped. A lookup failure other than "not found" aborts the
/// run, while grant failures are recorded and processing continues.
pub async fn assign_permissions<A: OrgApi>(
    api: &A,
    config: &Config,
    records: &[PermissionRecord],
) -> Result<StageReport> {
    let mut report = StageReport::new(Stage::Permissions);
    assign_permissions_into(api, config, records, &mut report).await?;
    Ok(report)
}

/// Like [`assign_permissions`], recording into `report` so results gathered
/// before a fatal lookup error are kept
pub(crate) async fn assign_permissions_into<A: OrgApi>(
    api: &A,
    config: &Config,
    records: &[PermissionRecord],
    report: &mut StageReport,
) -> Result<()> {
    let org = config.org.as_str();
    info!("Found {} permission entries to process", records.len());

    for (index, record) in records.iter().enumerate() {
        let (Some(repo), Some(team), Some(permission)) =
            (record.repository(), record.team(), record.permission())
        else {
            warn!("Missing repository, team, or permission, skipping entry");
            report.push(
                format!("record #{}", index + 1),
                Outcome::skipped("missing repository, team, or permission"),
            );
            continue;
        };
        let subject = format!("{} <- {} ({})", repo, team, permission);

        let permission: Permission = match permission.parse() {
            Ok(permission) => permission,
            Err(reason) => {
                warn!(
                    "Invalid permission '{}' for repo '{}' and team '{}', skipping entry",
                    permission, repo, team
                );
                report.push(subject, Outcome::skipped(reason));
                continue;
            }
        };

        let repository = api.get_repository(org, repo).await.map_err(|e| {
            error!("Failed to look up repository '{}': {}", repo, e);
            e
        })?;
        if repository.is_none() {
            warn!(
                "Repository '{}' does not exist, skipping permission entry",
                repo
            );
            report.push(subject, Outcome::skipped("repository does not exist"));
            continue;
        }

        let slug = team_slug(team);
        let existing_team = api.get_team(org, &slug).await.map_err(|e| {
            error!("Failed to look up team '{}': {}", team, e);
            e
        })?;
        if existing_team.is_none() {
            warn!("Team '{}' does not exist, skipping permission entry", team);
            report.push(subject, Outcome::skipped("team does not exist"));
            continue;
        }

        if config.dry_run {
            info!(
                "Would set '{}' permission for team '{}' on repo '{}'",
                permission, team, repo
            );
            report.push(subject, Outcome::Planned);
            continue;
        }

        let outcome = match api
            .set_team_repo_permission(org, &slug, org, repo, permission)
            .await
        {
            Ok(()) => {
                info!(
                    "Set '{}' permission for team '{}' on repo '{}'",
                    permission, team, repo
                );
                Outcome::Created
            }
            Err(e) => {
                error!(
                    "Error setting permission for team '{}' on repo '{}': {}",
                    team, repo, e
                );
                Outcome::failed(e)
            }
        };
        report.push(subject, outcome);
    }

    info!("Repository permissions processing completed: {}", report.summary());
    Ok(())
}
