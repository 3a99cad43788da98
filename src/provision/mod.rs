//! Provisioning pipeline
//!
//! Runs the selected stages in order (teams, repositories, permissions). Each
//! stage loads its own CSV file and processes the rows one at a time: validate,
//! look up, then create or grant only what is missing.

#[cfg(test)]
pub(crate) mod fake;
mod permissions;
mod repos;
pub mod report;
mod teams;

use log::{info, warn};

use crate::cli::Stage;
use crate::config::Config;
use crate::error::{ProvisionError, Result};
use crate::github::OrgApi;
use crate::input::load_records;

pub use permissions::assign_permissions;
pub use repos::provision_repositories;
pub use report::{Outcome, RecordResult, RunReport, StageReport, Summary};
pub use teams::provision_teams;

/// Fail before any API call if an input file for a selected stage is missing
pub fn check_inputs(config: &Config) -> Result<()> {
    for stage in &config.stages {
        let path = config.input_path(*stage);
        if !path.is_file() {
            return Err(ProvisionError::MissingInput(path));
        }
    }
    Ok(())
}

/// Run every selected stage against the organization
///
/// Results are recorded into `report` as they are produced, so when a fatal
/// error stops the run the report still holds everything processed before it.
pub async fn run<A: OrgApi>(api: &A, config: &Config, report: &mut RunReport) -> Result<()> {
    check_inputs(config)?;

    if config.dry_run {
        info!("Dry run: no teams, repositories or permissions will be changed");
    }

    for stage in &config.stages {
        let path = config.input_path(*stage);
        let mut stage_report = StageReport::new(*stage);

        let result = match stage {
            Stage::Teams => match provision_teams(api, config, &load_records(&path)?).await {
                Ok(teams) => {
                    stage_report = teams;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Stage::Repos => {
                let records = load_records(&path)?;
                repos::provision_repositories_into(api, config, &records, &mut stage_report).await
            }
            Stage::Permissions => {
                let records = load_records(&path)?;
                permissions::assign_permissions_into(api, config, &records, &mut stage_report)
                    .await
            }
        };

        report.stages.push(stage_report);
        if let Err(e) = result {
            warn!("Provisioning aborted during the {} stage", stage);
            return Err(e);
        }
    }

    info!("GitHub provisioning completed for {}", config.org);
    Ok(())
}
