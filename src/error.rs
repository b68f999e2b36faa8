use std::io;

use thiserror::Error;

/// Failure of a single optimization run, categorized for the end user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file type error: {0}")]
    FileType(String),

    #[error("document parsing error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The tariff timeline could not be built even though the query passed validation.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("input/output error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("charging query doesn't contain data")]
    MissingQuery,

    #[error("user settings unspecified")]
    MissingUserSettings,

    #[error("car data unspecified")]
    MissingCarData,

    #[error("{0} cannot be below 0")]
    NegativePercentage(&'static str),

    #[error("{0} cannot exceed 100")]
    PercentageAboveHundred(&'static str),

    #[error("direct charging percentage cannot exceed desired state of charge")]
    DirectExceedsDesired,

    #[error("tariffs unspecified")]
    MissingTariffs,

    #[error("{0} cannot be equal to or below 0")]
    NotPositive(&'static str),

    #[error("current battery level cannot be below 0")]
    NegativeBatteryLevel,

    #[error("current battery level cannot exceed max battery capacity")]
    BatteryLevelExceedsCapacity,

    #[error("starting charge time cannot be in the past")]
    StartingTimeInPast,

    #[error("tariff intersection detected")]
    TariffIntersection,

    #[error("tariffs do not encompass the charging period")]
    ChargingPeriodNotCovered,
}
