//! Stock quantities.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A whole number of stock units.
///
/// Unsigned by construction, so a counter of this type can never go negative;
/// arithmetic that would underflow is exposed through `checked_sub` only.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }

    pub fn saturating_sub(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_sub(other.0))
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sub_refuses_to_go_below_zero() {
        assert_eq!(Quantity::new(3).checked_sub(Quantity::new(4)), None);
        assert_eq!(Quantity::new(3).checked_sub(Quantity::new(3)), Some(Quantity::ZERO));
    }

    #[test]
    fn checked_add_refuses_to_wrap() {
        assert_eq!(Quantity::new(u32::MAX).checked_add(Quantity::new(1)), None);
        assert_eq!(Quantity::new(4).checked_add(Quantity::new(6)), Some(Quantity::new(10)));
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        assert_eq!(Quantity::new(2).saturating_sub(Quantity::new(5)), Quantity::ZERO);
    }
}
