//! Common utilities for output formatters

use serde::Serialize;

use crate::error::{ProvisionError, Result};

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let yaml = serde_yml::to_string(value).map_err(|e| ProvisionError::Json(e.to_string()))?;
    print!("{}", yaml);
    Ok(())
}
