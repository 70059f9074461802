//! Trait definitions for the ringmat API

pub mod element;

pub use element::{RingElement, SecretElement};
