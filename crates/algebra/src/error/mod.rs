//! Error handling for the matrix engine

use core::fmt;

use ringmat_api::{Error as CoreError, Result as CoreResult};

/// The error type for matrix construction and algebra
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-positive row or column count at construction
    Shape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Source data is absent where a grid is required
    /// (an empty source, or an absent first row)
    NullSource {
        /// Construction path that rejected the source
        context: &'static str,
    },

    /// A row is absent where a present row is required
    MissingRow {
        /// Index of the absent row
        row: usize,
    },

    /// Rows of unequal length
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row, which fixes the column count
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Access or update outside `[0, dimension)`
    Index {
        /// Which axis was violated ("row" or "column")
        axis: &'static str,
        /// Index that was requested
        index: usize,
        /// Number of valid indices on that axis
        len: usize,
    },

    /// Incompatible dimensions for add/subtract/multiply
    Mismatch {
        /// Operation that was attempted
        operation: &'static str,
        /// Shape of the receiver, as (rows, cols)
        left: (usize, usize),
        /// Shape of the other operand, as (rows, cols)
        right: (usize, usize),
    },

    /// A hole (explicitly absent cell) was fed to a binary operation
    Hole {
        /// Operation that was attempted
        operation: &'static str,
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// A ring element operation failed
    Element(CoreError),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Shape { rows, cols } => {
                write!(f, "Cannot create a {}x{} matrix: both dimensions must be at least 1", rows, cols)
            }
            Error::NullSource { context } => {
                write!(f, "Cannot create a matrix from absent source data in {}", context)
            }
            Error::MissingRow { row } => {
                write!(f, "Row {} of the source grid is absent", row)
            }
            Error::Ragged {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {} has {} cells but the matrix has {} columns",
                    row, actual, expected
                )
            }
            Error::Index { axis, index, len } => {
                write!(f, "{} index {} out of range (valid: 0..{})", axis, index, len)
            }
            Error::Mismatch {
                operation,
                left,
                right,
            } => {
                write!(
                    f,
                    "Cannot {} a {}x{} matrix and a {}x{} matrix",
                    operation, left.0, left.1, right.0, right.1
                )
            }
            Error::Hole { operation, row, col } => {
                write!(
                    f,
                    "Cell ({}, {}) is a hole and cannot be an operand of {}",
                    row, col, operation
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Element(inner) => write!(f, "{}", inner),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Element-level failures propagate through `?` in matrix operations
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Element(err)
    }
}

// Implement conversion to the shared error vocabulary
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Shape { rows, cols } => CoreError::IncompatibleShape {
                context: "matrix construction",
                expected: (1, 1),
                actual: (rows, cols),
            },
            Error::NullSource { context } => CoreError::InvalidParameter {
                context,
                reason: "source data is absent",
            },
            Error::MissingRow { .. } => CoreError::InvalidParameter {
                context: "matrix construction",
                reason: "a source row is absent",
            },
            Error::Ragged {
                expected, actual, ..
            } => CoreError::InvalidLength {
                context: "matrix row",
                expected,
                actual,
            },
            Error::Index { axis, index, len } => CoreError::OutOfRange {
                context: axis,
                index,
                limit: len,
            },
            Error::Mismatch {
                operation,
                left,
                right,
            } => CoreError::IncompatibleShape {
                context: operation,
                expected: left,
                actual: right,
            },
            Error::Hole { operation, .. } => CoreError::Domain {
                context: operation,
                reason: "operand cell is a hole",
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Element(inner) => inner,
        }
    }
}

/// Convert a matrix result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| {
        let mut core = CoreError::from(e);
        core = core.with_context(ctx);
        core
    })
}

// Re-export core error handling traits for convenience
pub use ringmat_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
