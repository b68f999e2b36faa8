use std::fmt::{Debug, Formatter};

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::quantity::time::Hours;

#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: NaiveDateTime,

    /// Exclusive.
    pub end: NaiveDateTime,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Span from the starting time until the next occurrence of the leaving time.
    ///
    /// The leaving time is on the same day if it comes strictly after the starting time of day,
    /// otherwise it is on the next day.
    pub fn until_time_of_day(start: NaiveDateTime, leaving_time: NaiveTime) -> Self {
        let mut end = start.date().and_time(leaving_time);
        if end <= start {
            end += TimeDelta::days(1);
        }
        Self { start, end }
    }

    pub const fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    pub const fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn hours(self) -> Hours {
        Hours::from_time_delta(self.duration())
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }
}
