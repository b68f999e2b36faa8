use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::{
    core::{
        query::{CarData, ChargingQuery, Tariff, UserSettings},
        time_window::TimeWindow,
    },
    error::ValidationError,
    prelude::*,
};

/// Charging query with all the sections present and consistent.
#[derive(Copy, Clone)]
pub struct ValidQuery<'a> {
    pub starting_time: NaiveDateTime,
    pub user_settings: &'a UserSettings,
    pub car_data: &'a CarData,
}

/// Validate the whole query, failing on the first violated rule.
#[instrument(skip_all, fields(starting_time = %query.starting_time))]
pub fn validate_charging_query(
    query: &ChargingQuery,
    now: NaiveDateTime,
) -> Result<ValidQuery<'_>, ValidationError> {
    let user_settings = query.user_settings.as_ref().ok_or(ValidationError::MissingUserSettings)?;
    let car_data = query.car_data.as_ref().ok_or(ValidationError::MissingCarData)?;

    validate_user_settings(user_settings)?;
    validate_car_data(car_data)?;
    if query.starting_time < now {
        return Err(ValidationError::StartingTimeInPast);
    }

    let charging_window = TimeWindow::new(query.starting_time.time(), user_settings.leaving_time);
    validate_tariff_coverage(&user_settings.tariffs, charging_window)?;

    debug!(n_tariffs = user_settings.tariffs.len(), "valid");
    Ok(ValidQuery { starting_time: query.starting_time, user_settings, car_data })
}

pub fn validate_user_settings(user_settings: &UserSettings) -> Result<(), ValidationError> {
    validate_percentage(user_settings.desired_state_of_charge, "desired state of charge")?;
    validate_percentage(user_settings.direct_charging_percentage, "direct charging percentage")?;
    if user_settings.direct_charging_percentage > user_settings.desired_state_of_charge {
        return Err(ValidationError::DirectExceedsDesired);
    }
    if user_settings.tariffs.is_empty() {
        return Err(ValidationError::MissingTariffs);
    }
    user_settings.tariffs.iter().try_for_each(validate_tariff)
}

pub fn validate_car_data(car_data: &CarData) -> Result<(), ValidationError> {
    if !car_data.charge_power.is_positive() {
        return Err(ValidationError::NotPositive("charge power"));
    }
    if !car_data.battery_capacity.is_positive() {
        return Err(ValidationError::NotPositive("battery capacity"));
    }
    if car_data.current_battery_level.is_negative() {
        return Err(ValidationError::NegativeBatteryLevel);
    }
    if car_data.current_battery_level > car_data.battery_capacity {
        return Err(ValidationError::BatteryLevelExceedsCapacity);
    }
    Ok(())
}

pub fn validate_tariff(tariff: &Tariff) -> Result<(), ValidationError> {
    if tariff.energy_price.is_positive() {
        Ok(())
    } else {
        Err(ValidationError::NotPositive("energy price"))
    }
}

/// Check that the tariffs do not overlap, and that they cover the charging window.
///
/// Adjacent tariffs are chained into contiguous runs, and at least one run must encompass the
/// charging window.
pub fn validate_tariff_coverage(
    tariffs: &[Tariff],
    charging_window: TimeWindow,
) -> Result<(), ValidationError> {
    let windows = tariffs.iter().map(Tariff::window).sorted_by_key(|window| window.end).collect_vec();

    if windows.iter().tuple_combinations().any(|(lhs, rhs)| lhs.intersects(*rhs)) {
        return Err(ValidationError::TariffIntersection);
    }

    let is_covered = windows
        .into_iter()
        .coalesce(|run, next| {
            if run.end == next.start { Ok(TimeWindow::new(run.start, next.end)) } else { Err((run, next)) }
        })
        .inspect(|run| trace!(?run, "contiguous tariffs"))
        .any(|run| run.encompasses(charging_window));
    if is_covered { Ok(()) } else { Err(ValidationError::ChargingPeriodNotCovered) }
}

fn validate_percentage(percent: i32, name: &'static str) -> Result<(), ValidationError> {
    if percent < 0 {
        Err(ValidationError::NegativePercentage(name))
    } else if percent > 100 {
        Err(ValidationError::PercentageAboveHundred(name))
    } else {
        Ok(())
    }
}
