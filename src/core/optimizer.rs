use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crate::{
    core::{
        charging_period::ChargingPeriod,
        interval::Interval,
        query::{CarData, ChargingQuery},
        tariff_period::{TariffPeriod, expand_tariffs},
        validator::validate_charging_query,
    },
    error::Error,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, power::Kilowatts},
};

/// Optimized charging schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plan {
    /// Sorted and merged.
    pub periods: Vec<ChargingPeriod>,

    pub summary: Summary,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Simulated battery level at the leaving time.
    pub final_battery_level: KilowattHours,

    pub charged_energy: KilowattHours,

    /// Energy cost of the charging periods.
    pub cost: Cost,

    /// Whether the desired state of charge is reached by the leaving time.
    pub is_desired_reached: bool,
}

/// Greedy charging scheduler for a single query.
///
/// The plan is computed on the first [`Optimizer::optimize`] call and reused afterwards.
#[derive(bon::Builder)]
pub struct Optimizer<'a> {
    query: &'a ChargingQuery,

    /// Moment against which the starting time is validated.
    now: NaiveDateTime,

    #[builder(skip)]
    plan: Option<Plan>,
}

impl Optimizer<'_> {
    pub fn optimize(&mut self) -> Result<&Plan, Error> {
        let plan = match self.plan.take() {
            Some(plan) => plan,
            None => self.build_plan()?,
        };
        Ok(self.plan.insert(plan))
    }

    #[instrument(skip_all, fields(starting_time = %self.query.starting_time))]
    fn build_plan(&self) -> Result<Plan, Error> {
        let query = validate_charging_query(self.query, self.now)?;
        let user_settings = query.user_settings;
        let capacity = query.car_data.battery_capacity;
        let span = Interval::until_time_of_day(query.starting_time, user_settings.leaving_time);
        let desired_level = checked(capacity.checked_percentage(user_settings.desired_state_of_charge), || {
            format!("desired level overflow: {capacity}")
        })?;
        let direct_level = checked(capacity.checked_percentage(user_settings.direct_charging_percentage), || {
            format!("direct charging level overflow: {capacity}")
        })?;

        let mut session = Session::new(query.car_data);
        info!(
            battery_level = %session.battery_level,
            direct_level = %direct_level,
            desired_level = %desired_level,
            "planning…"
        );

        if session.battery_level >= desired_level {
            info!("the battery is already charged");
            session.periods.push(ChargingPeriod::idle(span));
            return Ok(session.finish(desired_level));
        }

        let mut timeline = VecDeque::from(expand_tariffs(&user_settings.tariffs, span)?);

        if session.battery_level < direct_level {
            session.charge_until(direct_level, &mut timeline)?;
        }
        if session.battery_level < desired_level {
            // Cheapest first, earlier first on ties:
            timeline.make_contiguous().sort_by_key(|period| (period.price, period.interval.start));
            session.charge_until(desired_level, &mut timeline)?;
        }
        session.periods.extend(timeline.into_iter().map(|period| ChargingPeriod::idle(period.interval)));

        Ok(session.finish(desired_level))
    }
}

/// Simulated charging session.
struct Session {
    charge_power: Kilowatts,
    battery_level: KilowattHours,
    charged_energy: KilowattHours,
    cost: Cost,
    periods: Vec<ChargingPeriod>,
}

impl Session {
    fn new(car_data: &CarData) -> Self {
        Self {
            charge_power: car_data.charge_power,
            battery_level: car_data.current_battery_level,
            charged_energy: KilowattHours::ZERO,
            cost: Cost::ZERO,
            periods: Vec::new(),
        }
    }

    /// Charge in the timeline order until the target level is reached or the timeline is exhausted.
    ///
    /// A partially used tariff period stays at the front of the timeline.
    fn charge_until(
        &mut self,
        target_level: KilowattHours,
        timeline: &mut VecDeque<TariffPeriod>,
    ) -> Result<(), Error> {
        while let Some(period) = timeline.pop_front() {
            let missing_energy = target_level - self.battery_level;
            let needed_time = checked(missing_energy.checked_div(self.charge_power), || {
                format!("charging time overflow: {missing_energy} at {}", self.charge_power)
            })?;

            if needed_time <= period.interval.hours() {
                let charging_end = needed_time
                    .to_time_delta()
                    .and_then(|delta| period.interval.start.checked_add_signed(delta));
                let charging_end = checked(charging_end, || format!("charging time overflow: {needed_time}"))?
                    .min(period.interval.end);
                let charging = period.interval.with_end(charging_end);
                trace!(?charging, price = %period.price, "charging until the target");
                if !charging.is_empty() {
                    self.periods.push(ChargingPeriod::charging(charging));
                }
                self.add(missing_energy, period)?;

                let remainder = period.interval.with_start(charging_end);
                if !remainder.is_empty() {
                    timeline.push_front(period.with_interval(remainder));
                }
                return Ok(());
            }

            let energy = checked(self.charge_power.checked_mul(period.interval.hours()), || {
                format!("energy overflow: {} over {}", self.charge_power, period.interval.hours())
            })?;
            trace!(interval = ?period.interval, %energy, "charging the entire period");
            self.periods.push(ChargingPeriod::charging(period.interval));
            self.add(energy, period)?;
        }

        debug!(battery_level = %self.battery_level, target_level = %target_level, "out of time");
        Ok(())
    }

    fn add(&mut self, energy: KilowattHours, period: TariffPeriod) -> Result<(), Error> {
        let cost = energy.checked_mul(period.price).and_then(|cost| self.cost.checked_add(cost));
        self.cost = checked(cost, || format!("cost overflow: {energy} at {}", period.price))?;
        self.battery_level = checked(self.battery_level.checked_add(energy), || {
            format!("battery level overflow: {}", self.battery_level)
        })?;
        self.charged_energy = checked(self.charged_energy.checked_add(energy), || {
            format!("charged energy overflow: {}", self.charged_energy)
        })?;
        Ok(())
    }

    fn finish(self, desired_level: KilowattHours) -> Plan {
        let is_desired_reached = self.battery_level >= desired_level;
        if !is_desired_reached {
            warn!(
                battery_level = %self.battery_level,
                desired_level = %desired_level,
                "the desired state of charge cannot be reached by the leaving time"
            );
        }
        let summary = Summary {
            final_battery_level: self.battery_level,
            charged_energy: self.charged_energy,
            cost: self.cost,
            is_desired_reached,
        };
        Plan { periods: ChargingPeriod::merge(self.periods), summary }
    }
}

fn checked<T>(value: Option<T>, message: impl FnOnce() -> String) -> Result<T, Error> {
    value.ok_or_else(|| Error::InternalConsistency(message()))
}
