use std::fmt::{Debug, Formatter};

use chrono::NaiveTime;

/// Recurring daily window `[start, end)` on the 24-hour clock.
///
/// When `start > end`, the window wraps past midnight. When `start == end`, the window is the
/// whole day rather than empty.
#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Debug for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl TimeWindow {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_whole_day(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn is_overnight(self) -> bool {
        self.start > self.end
    }

    /// Check whether the time lies strictly inside the window.
    ///
    /// The boundaries themselves are not contained, unless the window is the whole day.
    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        if self.is_whole_day() {
            true
        } else if self.is_overnight() {
            self.start < time || time < self.end
        } else {
            self.start < time && time < self.end
        }
    }

    /// Half-open variant of [`TimeWindow::contains`]: the start belongs to the window.
    #[must_use]
    pub fn covers(self, time: NaiveTime) -> bool {
        time == self.start || self.contains(time)
    }

    /// Check whether the windows share any time. Symmetric.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self == other
            || self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
            || self.strictly_encompasses(other)
            || other.strictly_encompasses(self)
    }

    /// Check whether the other window fits into this one.
    ///
    /// Only the whole-day case is wraparound-aware, the bounds are compared linearly.
    #[must_use]
    pub fn encompasses(self, other: Self) -> bool {
        self.is_whole_day() || (self.start <= other.start && other.end <= self.end)
    }

    fn strictly_encompasses(self, other: Self) -> bool {
        !self.is_overnight()
            && !other.is_overnight()
            && self.start < other.start
            && other.end < self.end
    }
}
