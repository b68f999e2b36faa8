use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::quantity::Quantity;

pub type Cost = Quantity<Decimal, 0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
