use std::fmt::{Display, Formatter};

use chrono::TimeDelta;
use rust_decimal::{Decimal, dec, prelude::ToPrimitive};

use crate::quantity::Quantity;

pub type Hours = Quantity<Decimal, 0, 1, 0>;

const MILLISECONDS_PER_HOUR: Decimal = dec!(3600000);

impl Hours {
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        Self(Decimal::from(delta.num_milliseconds()) / MILLISECONDS_PER_HOUR)
    }

    /// Convert into a time delta, rounded to the nearest millisecond.
    ///
    /// Returns [`None`] when the value does not fit into [`TimeDelta`].
    pub fn to_time_delta(self) -> Option<TimeDelta> {
        self.0
            .checked_mul(MILLISECONDS_PER_HOUR)?
            .round()
            .to_i64()
            .and_then(TimeDelta::try_milliseconds)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}
