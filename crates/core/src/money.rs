//! Money in minor currency units (paise).
//!
//! All amounts are carried internally as whole paise; rupee floats exist only
//! at the JSON boundary. 100 paise = 1 rupee.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Smallest amount the payment gateway will accept for an order (1 rupee).
pub const MIN_CHARGEABLE: Paise = Paise(100);

/// A non-negative amount of money in paise.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Paise(u64);

impl Paise {
    pub const ZERO: Paise = Paise(0);

    pub const fn new(paise: u64) -> Self {
        Self(paise)
    }

    /// Convert a caller-supplied rupee amount to paise.
    ///
    /// Rejects negative and non-finite inputs; fractional paise are rounded
    /// half away from zero (₹10.005 becomes 1001 paise).
    pub fn from_rupees(rupees: f64) -> DomainResult<Self> {
        if !rupees.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if rupees < 0.0 {
            return Err(DomainError::validation("amount must not be negative"));
        }
        let paise = (rupees * 100.0).round();
        if paise > u64::MAX as f64 {
            return Err(DomainError::validation("amount out of range"));
        }
        Ok(Self(paise as u64))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn to_rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn checked_add(self, other: Paise) -> DomainResult<Paise> {
        self.0
            .checked_add(other.0)
            .map(Paise)
            .ok_or_else(|| DomainError::validation("amount overflow"))
    }

    /// Line subtotal: unit price times quantity.
    pub fn checked_mul(self, quantity: u32) -> DomainResult<Paise> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Paise)
            .ok_or_else(|| DomainError::validation("amount overflow"))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Paise {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
