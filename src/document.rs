//! Request and response JSON documents.

use std::{fs, path::Path};

use crate::{
    core::{charging_period::ChargingPeriod, query::ChargingQuery},
    error::{Error, ValidationError},
    prelude::*,
};

/// Ensure that the path points to a JSON document.
pub fn check_file_type(path: &Path) -> Result<(), Error> {
    if path.extension().is_some_and(|extension| extension == "json") {
        Ok(())
    } else {
        Err(Error::FileType(format!("`{}` is not a JSON document", path.display())))
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_query(path: &Path) -> Result<ChargingQuery, Error> {
    check_file_type(path)?;
    let contents = fs::read_to_string(path)?;
    let query: Option<ChargingQuery> = serde_json::from_str(&contents)?;
    debug!(is_present = query.is_some(), "parsed");
    query.ok_or(Error::Validation(ValidationError::MissingQuery))
}

#[instrument(skip_all, fields(path = %path.display(), n_periods = periods.len()))]
pub fn write_schedule(path: &Path, periods: &[ChargingPeriod]) -> Result<(), Error> {
    check_file_type(path)?;
    fs::write(path, serde_json::to_string_pretty(periods)?)?;
    debug!("written");
    Ok(())
}
