//! Immutable matrix algebra over generic ring elements
//!
//! A [`Matrix`] is an ordered, rectangular collection of cells over a ring
//! element type. A vector is the special case of a single row or column.
//!
//! The type is immutable: every operation, including the setter, validates
//! its inputs, computes a fresh cell grid, and returns a new matrix. Prior
//! instances stay valid and are never aliased, so matrices can be shared
//! freely across threads and used as keys in hash-based collections
//! (structural equality and hashing are derived from the dimensions and the
//! row-major cell sequence).
//!
//! Cells may be explicitly absent ("holes"). Holes survive construction,
//! `set`, `transpose` and `scalar_mul`, and compare equal only to holes;
//! feeding one to a binary operation is an error, not a silent identity.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use ringmat_api::{Error as CoreError, RingElement, SecretElement};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
mod serialize;

/// A matrix cell: either a ring element or an explicit hole
pub type Cell<T> = Option<T>;

/// An immutable `rows x cols` matrix over a ring element type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T: RingElement> {
    /// Number of rows, always at least 1
    rows: usize,
    /// Number of columns, always at least 1
    cols: usize,
    /// Cell grid in row-major order, length `rows * cols`
    cells: Vec<Cell<T>>,
}

impl<T: RingElement> Matrix<T> {
    /// Creates an all-hole matrix with the specified dimensions.
    ///
    /// Mostly useful as a staging grid to be filled through [`set`](Self::set).
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate::shape(rows, cols)?;
        let mut cells = Vec::new();
        cells.resize_with(rows * cols, || None);
        Ok(Self { rows, cols, cells })
    }

    /// Creates a matrix from an ordered sequence of rows.
    ///
    /// The column count is derived from the first row. Fails with
    /// `NullSource` if the sequence is empty, `Shape` if the first row is
    /// empty, and `Ragged` if any later row differs in length.
    pub fn from_rows(rows: Vec<Vec<Cell<T>>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::NullSource {
                context: "from_rows",
            });
        }
        let n_rows = rows.len();
        let n_cols = rows[0].len();
        validate::shape(n_rows, n_cols)?;

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::Ragged {
                    row: r,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Creates a matrix from a sequence of rows where a row itself may be
    /// absent.
    ///
    /// This is the ingestion path for grids decoded from external
    /// representations in which a row can be null. An absent first row (or
    /// an empty sequence) is `NullSource`; any other absent row is
    /// `MissingRow`, distinct from a present row containing holes.
    pub fn from_nullable_rows(rows: Vec<Option<Vec<Cell<T>>>>) -> Result<Self> {
        if rows.is_empty() || rows[0].is_none() {
            return Err(Error::NullSource {
                context: "from_nullable_rows",
            });
        }
        let mut present = Vec::with_capacity(rows.len());
        for (r, row) in rows.into_iter().enumerate() {
            match row {
                Some(row) => present.push(row),
                None => return Err(Error::MissingRow { row: r }),
            }
        }
        Self::from_rows(present)
    }

    /// Creates a matrix with every cell present.
    pub fn from_values(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Creates a matrix by evaluating a closure at every position.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Cell<T>,
    ) -> Result<Self> {
        validate::shape(rows, cols)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Creates a matrix with every cell set to a clone of `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| Some(value.clone()))
    }

    /// Number of rows in this matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in this matrix.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, holes included.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the cell at the specified position.
    ///
    /// Both indices are checked against the strict bound `0 <= i < dim`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>> {
        validate::index("row", row, self.rows)?;
        validate::index("column", col, self.cols)?;
        Ok(self.cells[self.idx(row, col)].as_ref())
    }

    /// Returns a new matrix with the cell at the specified position
    /// replaced by `value`.
    ///
    /// The receiver is unchanged. `value` may be a hole, clearing the cell.
    pub fn set(&self, value: Cell<T>, row: usize, col: usize) -> Result<Self> {
        validate::index("row", row, self.rows)?;
        validate::index("column", col, self.cols)?;
        let mut copy = self.clone();
        let i = copy.idx(row, col);
        copy.cells[i] = value;
        Ok(copy)
    }

    /// Returns the specified row as a cell slice.
    pub fn row(&self, row: usize) -> Result<&[Cell<T>]> {
        validate::index("row", row, self.rows)?;
        Ok(&self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns an iterator over the cells of the specified column.
    pub fn column(&self, col: usize) -> Result<impl Iterator<Item = &Cell<T>>> {
        validate::index("column", col, self.cols)?;
        Ok(self.cells[col..].iter().step_by(self.cols))
    }

    /// Multiplies every present cell by `scalar`.
    ///
    /// Holes propagate unchanged; element multiplication failures propagate
    /// as `Element` errors.
    pub fn scalar_mul(&self, scalar: &T) -> Result<Self> {
        let mut cells = Vec::with_capacity(self.size());
        for cell in &self.cells {
            cells.push(match cell {
                Some(value) => Some(value.checked_mul(scalar)?),
                None => None,
            });
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Element-wise addition.
    ///
    /// Fails with `Mismatch` unless `other` has identical dimensions, and
    /// with `Hole` if either operand cell is absent.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise("add", other, |a, b| a.checked_add(b))
    }

    /// Element-wise subtraction.
    ///
    /// Fails with `Mismatch` unless `other` has identical dimensions, and
    /// with `Hole` if either operand cell is absent.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.elementwise("subtract", other, |a, b| a.checked_sub(b))
    }

    fn elementwise(
        &self,
        operation: &'static str,
        other: &Self,
        f: impl Fn(&T, &T) -> ringmat_api::Result<T>,
    ) -> Result<Self> {
        validate::same_shape(operation, self.shape(), other.shape())?;
        let mut cells = Vec::with_capacity(self.size());
        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = self.idx(r, c);
                let a = self.cells[i].as_ref().ok_or(Error::Hole {
                    operation,
                    row: r,
                    col: c,
                })?;
                let b = other.cells[i].as_ref().ok_or(Error::Hole {
                    operation,
                    row: r,
                    col: c,
                })?;
                cells.push(Some(f(a, b)?));
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Returns the `cols x rows` transposition of this matrix.
    ///
    /// Cell `(i, j)` of the result is cell `(j, i)` of the receiver. Always
    /// succeeds for a well-formed matrix; holes move with their cells.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.size());
        for c in 0..self.cols {
            for r in 0..self.rows {
                cells.push(self.cells[self.idx(r, c)].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Standard matrix product.
    ///
    /// Fails with `Mismatch` unless `self.cols() == other.rows()`. Every
    /// result cell is the dot product of the corresponding receiver row and
    /// `other` column, and is always present.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::multiplicable("multiply", self.shape(), other.shape())?;
        let mut cells = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                cells.push(Some(self.dot(other, r, c)?));
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            cells,
        })
    }

    /// Dot product of receiver row `r` and `other` column `c`.
    ///
    /// The accumulation is seeded from the first term rather than an
    /// additive identity, so rings without a distinguished zero work; an
    /// empty dot product is therefore undefined and rejected.
    fn dot(&self, other: &Self, r: usize, c: usize) -> Result<T> {
        let mut acc: Option<T> = None;
        for k in 0..self.cols {
            let a = self.cells[self.idx(r, k)].as_ref().ok_or(Error::Hole {
                operation: "multiply",
                row: r,
                col: k,
            })?;
            let b = other.cells[other.idx(k, c)].as_ref().ok_or(Error::Hole {
                operation: "multiply",
                row: k,
                col: c,
            })?;
            let term = a.checked_mul(b)?;
            acc = Some(match acc {
                Some(sum) => sum.checked_add(&term)?,
                None => term,
            });
        }
        acc.ok_or(Error::Element(CoreError::Domain {
            context: "dot product",
            reason: "inner dimension is zero",
        }))
    }

    #[inline(always)]
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T: RingElement + Zeroize> Zeroize for Matrix<T> {
    fn zeroize(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Some(value) = cell {
                value.zeroize();
            }
        }
    }
}

/// Constant-time equality over secret cell material.
///
/// Shapes and the hole layout are treated as public: a dimension or
/// presence mismatch short-circuits. Present cell values are compared in
/// constant time.
impl<T: SecretElement> ConstantTimeEq for Matrix<T> {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.shape() != other.shape() {
            return Choice::from(0);
        }
        let mut acc = Choice::from(1);
        for (a, b) in self.cells.iter().zip(other.cells.iter()) {
            match (a, b) {
                (Some(a), Some(b)) => acc &= a.ct_eq(b),
                (None, None) => {}
                _ => return Choice::from(0),
            }
        }
        acc
    }
}
