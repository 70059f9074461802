//! Concrete ring element implementations
//!
//! The matrix engine is generic over any [`RingElement`]; these are the
//! elements the library ships. [`Int64`] models the integers with checked
//! arithmetic and [`Zq`] models the modular-integer rings Z/qZ used by
//! lattice constructions.
//!
//! [`RingElement`]: ringmat_api::RingElement

mod int;
mod modq;

pub use int::Int64;
pub use modq::Zq;
