use chrono::{NaiveDateTime, TimeDelta};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;

/// Single entry of the response schedule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingPeriod {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_charging: bool,
}

impl ChargingPeriod {
    pub const fn charging(interval: Interval) -> Self {
        Self { start_time: interval.start, end_time: interval.end, is_charging: true }
    }

    pub const fn idle(interval: Interval) -> Self {
        Self { start_time: interval.start, end_time: interval.end, is_charging: false }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Sort the periods and join the adjacent ones with the same mode.
    pub fn merge(periods: impl IntoIterator<Item = Self>) -> Vec<Self> {
        periods
            .into_iter()
            .sorted_by_key(|period| period.start_time)
            .coalesce(|lhs, rhs| {
                if lhs.end_time == rhs.start_time && lhs.is_charging == rhs.is_charging {
                    Ok(Self { end_time: rhs.end_time, ..lhs })
                } else {
                    Err((lhs, rhs))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn charging(start: u32, end: u32) -> ChargingPeriod {
        ChargingPeriod::charging(Interval::new(at(start), at(end)))
    }

    fn idle(start: u32, end: u32) -> ChargingPeriod {
        ChargingPeriod::idle(Interval::new(at(start), at(end)))
    }

    #[test]
    fn test_merge_sorts_and_joins() {
        let merged = ChargingPeriod::merge([idle(5, 7), charging(1, 2), charging(2, 3), idle(3, 5)]);
        assert_eq!(merged, [charging(1, 3), idle(3, 7)]);
    }

    #[test]
    fn test_merge_keeps_alternating_modes() {
        let periods = [charging(1, 2), idle(2, 3), charging(3, 4)];
        assert_eq!(ChargingPeriod::merge(periods), periods);
    }

    #[test]
    fn test_merge_keeps_gaps() {
        let periods = [charging(1, 2), charging(3, 4)];
        assert_eq!(ChargingPeriod::merge(periods), periods);
    }

    #[test]
    fn test_merge_empty() {
        assert!(ChargingPeriod::merge(Vec::<ChargingPeriod>::new()).is_empty());
    }

    #[test]
    fn test_serialize() -> serde_json::Result<()> {
        assert_eq!(
            serde_json::to_string(&charging(1, 2))?,
            r#"{"startTime":"2030-01-01T01:00:00","endTime":"2030-01-01T02:00:00","isCharging":true}"#,
        );
        Ok(())
    }

    #[test]
    fn test_document_is_stable() -> serde_json::Result<()> {
        let periods = vec![charging(1, 3), idle(3, 7)];
        let document = serde_json::to_string_pretty(&periods)?;
        let parsed: Vec<ChargingPeriod> = serde_json::from_str(&document)?;
        assert_eq!(parsed, periods);
        assert_eq!(serde_json::to_string_pretty(&parsed)?, document);
        Ok(())
    }
}
