//! CSV input loading
//!
//! Each stage reads one file with a header row; columns are matched by name,
//! so column order is free and unknown columns are ignored.

mod records;

use log::{debug, info};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{ProvisionError, Result};

pub use records::{PermissionRecord, RepositoryRecord, TeamRecord};

/// Read every row of a CSV file into `T`
///
/// A missing file is reported as [`ProvisionError::MissingInput`]; a malformed
/// row fails the whole file.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    info!("Reading {}", path.display());

    if !path.is_file() {
        return Err(ProvisionError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ProvisionError::Csv(format!("{}: {}", path.display(), e)))?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| ProvisionError::Csv(format!("{}: {}", path.display(), e)))?;

    debug!("Parsed {} row(s) from {}", records.len(), path.display());
    Ok(records)
}
