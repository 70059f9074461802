//! Checked 64-bit integer ring element

use core::fmt;

use ringmat_api::{Error, Result, RingElement};
use zeroize::Zeroize;

/// The ring of integers on a checked `i64`.
///
/// Arithmetic that leaves the representable range is a `Domain` error, not
/// a wrap-around. Z has no multiplicative inverses, so division is exact
/// division: a zero divisor or a non-zero remainder is a `Domain` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Int64(i64);

impl Int64 {
    /// Creates an integer element.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Int64 {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RingElement for Int64 {
    fn checked_add(&self, other: &Self) -> Result<Self> {
        self.0.checked_add(other.0).map(Self).ok_or(Error::Domain {
            context: "integer addition",
            reason: "result out of range for i64",
        })
    }

    fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.0.checked_sub(other.0).map(Self).ok_or(Error::Domain {
            context: "integer subtraction",
            reason: "result out of range for i64",
        })
    }

    fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.0.checked_mul(other.0).map(Self).ok_or(Error::Domain {
            context: "integer multiplication",
            reason: "result out of range for i64",
        })
    }

    fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.0 == 0 {
            return Err(Error::Domain {
                context: "integer division",
                reason: "division by zero",
            });
        }
        // i64::MIN / -1 overflows
        let quotient = self.0.checked_div(other.0).ok_or(Error::Domain {
            context: "integer division",
            reason: "result out of range for i64",
        })?;
        if self.0 % other.0 != 0 {
            return Err(Error::Domain {
                context: "integer division",
                reason: "operand is not an exact divisor in Z",
            });
        }
        Ok(Self(quotient))
    }
}
