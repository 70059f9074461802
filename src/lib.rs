//! # ringmat
//!
//! A matrix algebra engine generic over ring-like element types, built as the
//! linear-algebra core for lattice-based cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringmat = "0.2"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: validated serialization for matrices and shipped elements
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`ringmat-api`]: the `RingElement` contract and shared error types
//! - [`ringmat-algebra`]: the `Matrix` engine and concrete ring elements
//!
//! ## Example
//!
//! ```
//! use ringmat::prelude::*;
//!
//! let a = Matrix::from_values(vec![
//!     vec![Int64::from(1), Int64::from(2), Int64::from(3)],
//!     vec![Int64::from(4), Int64::from(5), Int64::from(6)],
//! ])?;
//! let b = Matrix::from_values(vec![
//!     vec![Int64::from(7), Int64::from(8)],
//!     vec![Int64::from(9), Int64::from(10)],
//!     vec![Int64::from(11), Int64::from(12)],
//! ])?;
//!
//! let product = a.mul(&b)?;
//! assert_eq!(product.get(0, 0)?, Some(&Int64::from(58)));
//! assert_eq!(product.get(1, 1)?, Some(&Int64::from(154)));
//! # Ok::<(), ringmat::algebra::error::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ringmat_algebra as algebra;
pub use ringmat_api as api;

/// Common imports for ringmat users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the element contracts
    pub use crate::api::{RingElement, SecretElement};

    // Re-export the matrix engine and shipped elements
    pub use crate::algebra::{Cell, Int64, Matrix, Zq};
}
