use chrono::NaiveTime;
use itertools::Itertools;

use crate::{
    core::{interval::Interval, query::Tariff},
    error::Error,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

/// Concrete, dated occurrence of a tariff.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TariffPeriod {
    pub interval: Interval,
    pub price: KilowattHourRate,
}

impl TariffPeriod {
    pub const fn new(interval: Interval, price: KilowattHourRate) -> Self {
        Self { interval, price }
    }

    pub const fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}

/// Lay the recurring tariffs onto the real timeline.
///
/// The resulting periods are chronological, gapless, non-empty, and span exactly the given
/// interval.
#[instrument(skip_all, fields(span = ?span))]
pub fn expand_tariffs(tariffs: &[Tariff], span: Interval) -> Result<Vec<TariffPeriod>, Error> {
    let tariffs = tariffs.iter().sorted_by_key(|tariff| tariff.end_time).collect_vec();
    let first = tariffs
        .iter()
        .position(|tariff| tariff.window().covers(span.start.time()))
        .ok_or_else(|| not_covered(span.start.time()))?;

    let mut periods = Vec::with_capacity(tariffs.len() + 1);
    let mut period_start = span.start;

    // A full day starting in the middle of a tariff touches it twice:
    for tariff in tariffs.iter().cycle().skip(first).take(tariffs.len() + 1) {
        if period_start >= span.end {
            break;
        }
        if !tariff.window().covers(period_start.time()) {
            return Err(not_covered(period_start.time()));
        }
        let period_end = Interval::until_time_of_day(period_start, tariff.end_time).end.min(span.end);
        let period = TariffPeriod::new(Interval::new(period_start, period_end), tariff.energy_price);
        trace!(interval = ?period.interval, price = %period.price, "expanded");
        periods.push(period);
        period_start = period_end;
    }

    if period_start < span.end {
        return Err(not_covered(period_start.time()));
    }
    debug!(n_periods = periods.len(), "expanded the tariffs");
    Ok(periods)
}

fn not_covered(time: NaiveTime) -> Error {
    Error::InternalConsistency(format!("no tariff continues the timeline at {}", time.format("%H:%M")))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use proptest::prelude::*;
    use rust_decimal::{Decimal, dec};

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn tariff(start_hour: u32, end_hour: u32, price: Decimal) -> Tariff {
        Tariff::new(time(start_hour, 0), time(end_hour, 0), KilowattHourRate::from(price))
    }

    fn period(start: NaiveDateTime, end: NaiveDateTime, price: Decimal) -> TariffPeriod {
        TariffPeriod::new(Interval::new(start, end), KilowattHourRate::from(price))
    }

    #[test]
    fn test_whole_day_tariff_overnight() -> Result<(), Error> {
        let periods = expand_tariffs(
            &[tariff(0, 0, dec!(0.2))],
            Interval::new(at(1, 23, 0), at(2, 7, 0)),
        )?;
        assert_eq!(
            periods,
            [period(at(1, 23, 0), at(2, 0, 0), dec!(0.2)), period(at(2, 0, 0), at(2, 7, 0), dec!(0.2))],
        );
        Ok(())
    }

    #[test]
    fn test_whole_day_tariff_not_anchored_at_midnight() -> Result<(), Error> {
        let periods = expand_tariffs(
            &[tariff(12, 12, dec!(0.2))],
            Interval::new(at(1, 9, 0), at(1, 11, 0)),
        )?;
        assert_eq!(periods, [period(at(1, 9, 0), at(1, 11, 0), dec!(0.2))]);
        Ok(())
    }

    #[test]
    fn test_two_tariffs() -> Result<(), Error> {
        let periods = expand_tariffs(
            &[tariff(12, 0, dec!(0.15)), tariff(0, 12, dec!(0.2))],
            Interval::new(at(1, 23, 0), at(2, 14, 0)),
        )?;
        assert_eq!(
            periods,
            [
                period(at(1, 23, 0), at(2, 0, 0), dec!(0.15)),
                period(at(2, 0, 0), at(2, 12, 0), dec!(0.2)),
                period(at(2, 12, 0), at(2, 14, 0), dec!(0.15)),
            ],
        );
        Ok(())
    }

    #[test]
    fn test_starting_on_tariff_boundary() -> Result<(), Error> {
        let periods = expand_tariffs(
            &[tariff(1, 3, dec!(0.2)), tariff(3, 7, dec!(0.25))],
            Interval::new(at(1, 3, 0), at(1, 7, 0)),
        )?;
        assert_eq!(periods, [period(at(1, 3, 0), at(1, 7, 0), dec!(0.25))]);
        Ok(())
    }

    #[test]
    fn test_full_day_from_the_middle_of_tariff() -> Result<(), Error> {
        let periods = expand_tariffs(
            &[tariff(0, 12, dec!(0.15)), tariff(12, 0, dec!(0.2))],
            Interval::new(at(1, 19, 0), at(2, 19, 0)),
        )?;
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[2], period(at(2, 12, 0), at(2, 19, 0), dec!(0.2)));
        Ok(())
    }

    #[test]
    fn test_gap_is_inconsistent() {
        // Nothing between 2:00 and 3:00:
        let result = expand_tariffs(
            &[tariff(22, 2, dec!(0.1)), tariff(3, 9, dec!(0.2))],
            Interval::new(at(1, 23, 0), at(2, 7, 0)),
        );
        assert!(matches!(result, Err(Error::InternalConsistency(_))), "{result:?}");
    }

    #[test]
    fn test_gap_before_midnight_is_inconsistent() {
        // `01:00..23:00` encompasses `02:00..00:00` linearly, yet nothing covers 23:00 to midnight:
        let result = expand_tariffs(&[tariff(1, 23, dec!(0.2))], Interval::new(at(1, 2, 0), at(2, 0, 0)));
        assert!(matches!(result, Err(Error::InternalConsistency(_))), "{result:?}");
    }

    #[test]
    fn test_start_not_covered() {
        let result =
            expand_tariffs(&[tariff(1, 3, dec!(0.1))], Interval::new(at(1, 5, 0), at(1, 6, 0)));
        assert!(matches!(result, Err(Error::InternalConsistency(_))), "{result:?}");
    }

    /// Partition of the day into tariffs at the given minute boundaries.
    fn partition(boundaries: &[u32]) -> Vec<Tariff> {
        let minute = |minute: u32| time(minute / 60, minute % 60);
        boundaries
            .iter()
            .zip(boundaries.iter().cycle().skip(1))
            .zip(1_u32..)
            .map(|((start, end), price)| {
                Tariff::new(minute(*start), minute(*end), KilowattHourRate::from(Decimal::from(price)))
            })
            .collect()
    }

    proptest! {
        #[test]
        fn expanded_periods_are_contiguous(
            boundaries in proptest::collection::btree_set(0..1440_u32, 1..6),
            start_minute in 0..1440_i64,
            duration_minutes in 1..=1440_i64,
        ) {
            let tariffs = partition(&boundaries.into_iter().collect_vec());
            let start = at(1, 0, 0) + TimeDelta::minutes(start_minute);
            let span = Interval::new(start, start + TimeDelta::minutes(duration_minutes));

            let periods = expand_tariffs(&tariffs, span).unwrap();

            prop_assert_eq!(periods.first().unwrap().interval.start, span.start);
            prop_assert_eq!(periods.last().unwrap().interval.end, span.end);
            for (lhs, rhs) in periods.iter().tuple_windows() {
                prop_assert_eq!(lhs.interval.end, rhs.interval.start);
            }
            for period in &periods {
                prop_assert!(!period.interval.is_empty());
                let tariff = tariffs.iter().find(|tariff| tariff.energy_price == period.price).unwrap();
                prop_assert!(tariff.window().covers(period.interval.start.time()));
            }
        }
    }
}
