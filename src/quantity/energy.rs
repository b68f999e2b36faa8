use std::fmt::{Display, Formatter};

use rust_decimal::{Decimal, dec};

use crate::quantity::{Quantity, cost::Cost, power::Kilowatts, rate::KilowattHourRate, time::Hours};

pub type KilowattHours = Quantity<Decimal, 1, 1, 0>;

impl KilowattHours {
    /// The given percentage of this energy, normally of the battery capacity.
    ///
    /// Returns [`None`] on overflow.
    pub fn checked_percentage(self, percent: i32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(percent))?.checked_div(dec!(100)).map(Self)
    }

    /// Cost of this energy at the given rate.
    pub fn checked_mul(self, rate: KilowattHourRate) -> Option<Cost> {
        self.0.checked_mul(rate.0).map(Quantity)
    }

    /// Time needed to charge this energy with the given power.
    pub fn checked_div(self, power: Kilowatts) -> Option<Hours> {
        self.0.checked_div(power.0).map(Quantity)
    }
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}
