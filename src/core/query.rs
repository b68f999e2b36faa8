//! Charging request, as it comes from the request document.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    core::{time_of_day::TimeOfDay, time_window::TimeWindow, timestamp::Timestamp},
    quantity::{energy::KilowattHours, power::Kilowatts, rate::KilowattHourRate},
};

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct ChargingQuery {
    /// When the car gets plugged in.
    #[serde_as(as = "Timestamp")]
    pub starting_time: NaiveDateTime,

    pub user_settings: Option<UserSettings>,

    pub car_data: Option<CarData>,
}

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Battery percentage the user wants at the leaving time.
    pub desired_state_of_charge: i32,

    #[serde_as(as = "TimeOfDay")]
    pub leaving_time: NaiveTime,

    /// Battery percentage which is charged right away, regardless of the price.
    pub direct_charging_percentage: i32,

    #[serde(default)]
    pub tariffs: Vec<Tariff>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct CarData {
    /// Constant charging power, assuming 100% efficiency.
    pub charge_power: Kilowatts,

    pub battery_capacity: KilowattHours,

    pub current_battery_level: KilowattHours,
}

/// Recurring daily energy price.
#[serde_as]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    #[serde_as(as = "TimeOfDay")]
    pub start_time: NaiveTime,

    #[serde_as(as = "TimeOfDay")]
    pub end_time: NaiveTime,

    pub energy_price: KilowattHourRate,
}

impl Tariff {
    pub const fn new(start_time: NaiveTime, end_time: NaiveTime, energy_price: KilowattHourRate) -> Self {
        Self { start_time, end_time, energy_price }
    }

    pub const fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}
