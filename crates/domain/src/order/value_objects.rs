//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Price paid for a single order.
///
/// Always a finite value in `[Price::MIN, Price::MAX]`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Lowest accepted price.
    pub const MIN: f64 = 1.0;

    /// Highest accepted price.
    pub const MAX: f64 = 10.0;

    /// Creates a price, rejecting NaN, infinities and out-of-range values.
    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::PriceOutOfRange {
                price: value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Returns the price as a float.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
