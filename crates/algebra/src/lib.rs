//! Matrix algebra over generic ring elements
//!
//! This crate implements the ringmat matrix engine: an immutable,
//! rectangular, ring-parameterized container with validated construction,
//! strict-bound element access, and the usual algebraic operations (add,
//! subtract, scalar multiply, multiply, transpose). It also ships two
//! concrete [`RingElement`](ringmat_api::RingElement) implementations:
//! checked 64-bit integers and a runtime-modulus Z/qZ element suitable for
//! lattice constructions.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod element;
pub mod error;
pub mod matrix;

pub use element::{Int64, Zq};
pub use matrix::{Cell, Matrix};
