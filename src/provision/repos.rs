//! Repository provisioning

use log::{error, info, warn};

use crate::cli::Stage;
use crate::config::Config;
use crate::error::Result;
use crate::github::{CreateRepositoryRequest, OrgApi};
use crate::input::RepositoryRecord;

use super::report::{Outcome, StageReport};

/// Create every repository in `records` that does not exist yet
///
/// A lookup failure other than "not found" aborts the run; creation failures
/// are recorded and processing continues.
pub async fn provision_repositories<A: OrgApi>(
    api: &A,
    config: &Config,
    records: &[RepositoryRecord],
) -> Result<StageReport> {
    let mut report = StageReport::new(Stage::Repos);
    provision_repositories_into(api, config, records, &mut report).await?;
    Ok(report)
}

/// Like [`provision_repositories`], recording into `report` so results
/// gathered before a fatal lookup error are kept
pub(crate) async fn provision_repositories_into<A: OrgApi>(
    api: &A,
    config: &Config,
    records: &[RepositoryRecord],
    report: &mut StageReport,
) -> Result<()> {
    let org = config.org.as_str();
    info!("Found {} repositories to process", records.len());

    for (index, record) in records.iter().enumerate() {
        let Some(name) = record.resolved_name() else {
            warn!("Repository name missing, skipping entry");
            report.push(
                format!("record #{}", index + 1),
                Outcome::skipped("repository name missing"),
            );
            continue;
        };

        let existing = api.get_repository(org, name).await.map_err(|e| {
            error!("Failed to look up repository '{}': {}", name, e);
            e
        })?;
        if existing.is_some() {
            info!("Repository '{}' already exists in {}", name, org);
            report.push(name, Outcome::Exists);
            continue;
        }

        let request = CreateRepositoryRequest::new(name, record.description(), record.settings());

        if config.dry_run {
            info!(
                "Would create repository '{}' in {} (private: {})",
                name, org, request.private
            );
            report.push(name, Outcome::Planned);
            continue;
        }

        info!("Creating repository '{}' in {}...", name, org);
        let outcome = match api.create_repository(org, &request).await {
            Ok(_) => {
                info!("Repository '{}' created successfully", name);
                Outcome::Created
            }
            Err(e) => {
                error!("Error processing '{}': {}", name, e);
                Outcome::failed(e)
            }
        };
        report.push(name, outcome);
    }

    info!("Repository processing completed: {}", report.summary());
    Ok(())
}
