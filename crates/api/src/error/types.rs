//! Error type definitions shared across the ringmat workspace

use core::fmt;

/// Primary error type for ring and matrix operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    ///
    /// Also the surface for cross-ring operand mixing where a single Rust
    /// type models a family of rings (e.g. a runtime modulus).
    InvalidParameter {
        /// Context where the parameter was rejected
        context: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Index outside the valid range `[0, limit)`
    OutOfRange {
        /// Context where the access occurred
        context: &'static str,
        /// Index that was requested
        index: usize,
        /// Exclusive upper bound on valid indices
        limit: usize,
    },

    /// Operand shapes are incompatible for the attempted operation
    IncompatibleShape {
        /// Operation that was attempted
        context: &'static str,
        /// Shape required by the receiver, as (rows, cols)
        expected: (usize, usize),
        /// Shape actually supplied, as (rows, cols)
        actual: (usize, usize),
    },

    /// The algebraic operation is undefined for the operands
    /// (e.g. division by a non-invertible element)
    Domain {
        /// Operation that was attempted
        context: &'static str,
        /// Why the operation is undefined
        reason: &'static str,
    },

    /// Fallback for other errors
    Other {
        /// Context where the error occurred
        context: &'static str,
    },
}

/// Result type for ring and matrix operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::OutOfRange { index, limit, .. } => Self::OutOfRange {
                context,
                index,
                limit,
            },
            Self::IncompatibleShape {
                expected, actual, ..
            } => Self::IncompatibleShape {
                context,
                expected,
                actual,
            },
            Self::Domain { reason, .. } => Self::Domain { context, reason },
            Self::Other { .. } => Self::Other { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { context, reason } => {
                write!(f, "Invalid parameter in {}: {}", context, reason)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::OutOfRange {
                context,
                index,
                limit,
            } => {
                write!(
                    f,
                    "Index {} out of range for {} (limit {})",
                    index, context, limit
                )
            }
            Error::IncompatibleShape {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Incompatible shape for {}: expected {}x{}, got {}x{}",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            Error::Domain { context, reason } => {
                write!(f, "Undefined operation in {}: {}", context, reason)
            }
            Error::Other { context } => write!(f, "Error in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
