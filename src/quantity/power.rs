use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

pub type Kilowatts = Quantity<Decimal, 1, 0, 0>;

impl Kilowatts {
    /// Energy charged with this power over the given time, [`None`] on overflow.
    pub fn checked_mul(self, hours: Hours) -> Option<KilowattHours> {
        self.0.checked_mul(hours.0).map(Quantity)
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}
