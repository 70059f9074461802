//! Modular-integer ring element with a runtime modulus

use core::fmt;

use rand::{CryptoRng, RngCore};
use ringmat_api::{Error, Result, RingElement, SecretElement};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// An element of Z/qZ for a runtime modulus `q >= 2`.
///
/// Each value carries its modulus, so a single Rust type models the whole
/// family of rings; mixing members of different rings in one operation is
/// an `InvalidParameter` error. Values are kept reduced to `[0, q)`.
///
/// Division multiplies by the modular inverse of the divisor. A divisor
/// that is not coprime to `q` has no inverse and is a `Domain` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zq {
    modulus: u64,
    value: u64,
}

impl Zq {
    /// Creates an element of Z/qZ, reducing `value` modulo `modulus`.
    pub fn new(value: u64, modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(Error::InvalidParameter {
                context: "Zq modulus",
                reason: "modulus must be at least 2",
            });
        }
        Ok(Self {
            modulus,
            value: value % modulus,
        })
    }

    /// Returns the reduced value in `[0, q)`.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the modulus `q`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Samples an element uniformly from `[0, q)` by rejection sampling.
    pub fn sample_uniform<R: RngCore + CryptoRng>(rng: &mut R, modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(Error::InvalidParameter {
                context: "Zq modulus",
                reason: "modulus must be at least 2",
            });
        }
        // Largest multiple of the modulus representable in u64; samples at
        // or above it would bias the reduction and are rejected.
        let threshold = (u64::MAX / modulus) * modulus;
        loop {
            let sample = rng.next_u64();
            if sample < threshold {
                return Self::new(sample % modulus, modulus);
            }
        }
    }

    #[inline(always)]
    fn same_ring(&self, other: &Self) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(Error::InvalidParameter {
                context: "Zq arithmetic",
                reason: "operands belong to different rings",
            });
        }
        Ok(())
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    fn inverse(&self) -> Result<Self> {
        let (mut t, mut new_t): (i128, i128) = (0, 1);
        let (mut r, mut new_r): (i128, i128) = (self.modulus as i128, self.value as i128);
        while new_r != 0 {
            let q = r / new_r;
            (t, new_t) = (new_t, t - q * new_t);
            (r, new_r) = (new_r, r - q * new_r);
        }
        if r != 1 {
            return Err(Error::Domain {
                context: "Zq division",
                reason: "operand is not invertible modulo q",
            });
        }
        let modulus = self.modulus as i128;
        let t = ((t % modulus) + modulus) % modulus;
        Self::new(t as u64, self.modulus)
    }
}

impl fmt::Display for Zq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl RingElement for Zq {
    fn checked_add(&self, other: &Self) -> Result<Self> {
        self.same_ring(other)?;
        let sum = (self.value as u128 + other.value as u128) % self.modulus as u128;
        Self::new(sum as u64, self.modulus)
    }

    fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.same_ring(other)?;
        let diff =
            (self.value as u128 + self.modulus as u128 - other.value as u128) % self.modulus as u128;
        Self::new(diff as u64, self.modulus)
    }

    fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.same_ring(other)?;
        let prod = (self.value as u128 * other.value as u128) % self.modulus as u128;
        Self::new(prod as u64, self.modulus)
    }

    fn checked_div(&self, other: &Self) -> Result<Self> {
        self.same_ring(other)?;
        let inv = other.inverse()?;
        self.checked_mul(&inv)
    }
}

impl ConstantTimeEq for Zq {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value) & self.modulus.ct_eq(&other.modulus)
    }
}

impl SecretElement for Zq {}

// Deserialization goes through `Zq::new` so decoded values are validated
// and reduced like directly constructed ones.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Zq {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct Repr {
            modulus: u64,
            value: u64,
        }

        let repr = Repr::deserialize(deserializer)?;
        Zq::new(repr.value, repr.modulus).map_err(D::Error::custom)
    }
}
