//! Trait definitions for matrix cell types
//!
//! This module defines the arithmetic contract a type must satisfy to be
//! usable as a matrix cell. The contract is a static trait bound, so an
//! incompatible element type is rejected at compile time rather than by
//! runtime instance checks.

use crate::error::Result;
use core::fmt::Debug;
use core::hash::Hash;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Contract for ring-like matrix cell types.
///
/// Implementations are value types: equality and hashing must be structural
/// so that matrix equality and hashing compose correctly, and the total
/// order from `Ord` must be consistent with equality (it is used for
/// diagnostics and testing, not by the matrix algebra itself).
///
/// Every operation is pure and closed over `Self`: operands are never
/// mutated and each call returns a fresh value.
///
/// # Failure contract
///
/// - An operand outside the ring a value belongs to (possible where one
///   Rust type models a family of rings, e.g. a runtime modulus) fails with
///   [`Error::InvalidParameter`](crate::Error::InvalidParameter).
/// - An operation that is undefined for the operands, such as division by
///   a non-invertible element, fails with
///   [`Error::Domain`](crate::Error::Domain). It must never silently
///   produce an invalid element.
pub trait RingElement: Clone + Debug + Eq + Ord + Hash {
    /// Ring addition.
    fn checked_add(&self, other: &Self) -> Result<Self>;

    /// Ring subtraction.
    fn checked_sub(&self, other: &Self) -> Result<Self>;

    /// Ring multiplication.
    fn checked_mul(&self, other: &Self) -> Result<Self>;

    /// Ring division.
    ///
    /// Defined only where `other` has a multiplicative inverse (or divides
    /// `self` exactly, for rings without inverses).
    fn checked_div(&self, other: &Self) -> Result<Self>;
}

/// Marker for ring elements that carry secret material.
///
/// Key and ciphertext cells must be wipeable from memory and comparable
/// without data-dependent timing.
pub trait SecretElement: RingElement + Zeroize + ConstantTimeEq {}
