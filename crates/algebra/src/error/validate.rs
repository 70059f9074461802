//! Validation utilities for matrix invariants

use super::{Error, Result};

/// Validate a shape at construction: both dimensions must be at least 1
/// and the cell count must be representable
#[inline(always)]
pub fn shape(rows: usize, cols: usize) -> Result<()> {
    if rows < 1 || cols < 1 {
        return Err(Error::Shape { rows, cols });
    }
    if rows.checked_mul(cols).is_none() {
        return Err(Error::param("shape", "cell count overflows usize"));
    }
    Ok(())
}

/// Validate an index against the strict bound `0 <= index < len`
#[inline(always)]
pub fn index(axis: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::Index { axis, index, len });
    }
    Ok(())
}

/// Validate that two operands have identical shapes
#[inline(always)]
pub fn same_shape(
    operation: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left != right {
        return Err(Error::Mismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that two operands are conformable for matrix multiplication
#[inline(always)]
pub fn multiplicable(
    operation: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.1 != right.0 {
        return Err(Error::Mismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}
