//! Validated serde support for matrices
//!
//! A matrix serializes as a sequence of rows, each a sequence of optional
//! cells. Deserialization routes through [`Matrix::from_nullable_rows`], so
//! malformed input (an empty grid, a null row, ragged rows) is rejected
//! with the same errors as direct construction instead of producing an
//! invalid matrix.

use alloc::vec::Vec;

use super::{Cell, Matrix};
use ringmat_api::RingElement;
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T> Serialize for Matrix<T>
where
    T: RingElement + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows()))?;
        for r in 0..self.rows() {
            // row() cannot fail for r < rows
            let row = self.row(r).map_err(serde::ser::Error::custom)?;
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: RingElement + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Option<Vec<Cell<T>>>> = Vec::deserialize(deserializer)?;
        Matrix::from_nullable_rows(rows).map_err(D::Error::custom)
    }
}
