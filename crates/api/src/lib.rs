//! Public API traits and types for the ringmat library
//!
//! This crate provides the public API surface for the ringmat workspace:
//! the ring-element contracts the matrix engine is generic over, and the
//! shared error vocabulary used across member crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{RingElement, SecretElement};

// Re-export trait modules for direct access
pub use traits::element;
