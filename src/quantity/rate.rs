use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::quantity::Quantity;

/// Energy price per kilowatt-hour, in the tariff table's currency.
pub type KilowattHourRate = Quantity<Decimal, -1, -1, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/kWh", self.0.normalize())
    }
}
