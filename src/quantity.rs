pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-point value tagged with its physical dimension.
///
/// The dimension exponents make sure that, for example, energy cannot be added to power.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::Sub,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const COST: isize>(pub T);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<Decimal, POWER, TIME, COST> {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns [`None`] on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}
