//! Property-based tests for the algebraic laws

use proptest::collection::vec;
use proptest::prelude::*;
use ringmat_algebra::{Int64, Matrix};

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<Int64>> {
    vec(-50i64..50, rows * cols).prop_map(move |values| {
        Matrix::from_fn(rows, cols, |r, c| Some(Int64::from(values[r * cols + c]))).unwrap()
    })
}

fn dims() -> impl Strategy<Value = usize> {
    1usize..=4
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in (dims(), dims()).prop_flat_map(|(r, c)| matrix(r, c))) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn transpose_swaps_dimensions(m in (dims(), dims()).prop_flat_map(|(r, c)| matrix(r, c))) {
        let t = m.transpose();
        prop_assert_eq!((t.rows(), t.cols()), (m.cols(), m.rows()));
        for r in 0..m.rows() {
            for c in 0..m.cols() {
                prop_assert_eq!(t.get(c, r).unwrap(), m.get(r, c).unwrap());
            }
        }
    }

    #[test]
    fn addition_roundtrips_under_subtraction(
        (m, n) in (dims(), dims()).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
    ) {
        prop_assert_eq!(m.add(&n).unwrap().sub(&n).unwrap(), m);
    }

    #[test]
    fn addition_commutes(
        (m, n) in (dims(), dims()).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
    ) {
        prop_assert_eq!(m.add(&n).unwrap(), n.add(&m).unwrap());
    }

    #[test]
    fn scalar_multiplication_distributes_over_addition(
        (m, n) in (dims(), dims()).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c))),
        k in -20i64..20,
    ) {
        let k = Int64::from(k);
        prop_assert_eq!(
            m.add(&n).unwrap().scalar_mul(&k).unwrap(),
            m.scalar_mul(&k).unwrap().add(&n.scalar_mul(&k).unwrap()).unwrap()
        );
    }

    #[test]
    fn multiplication_is_associative(
        (m, n, p) in (dims(), dims(), dims(), dims()).prop_flat_map(|(a, b, c, d)| {
            (matrix(a, b), matrix(b, c), matrix(c, d))
        }),
    ) {
        prop_assert_eq!(
            m.mul(&n).unwrap().mul(&p).unwrap(),
            m.mul(&n.mul(&p).unwrap()).unwrap()
        );
    }

    #[test]
    fn set_replaces_exactly_one_cell(
        m in (dims(), dims()).prop_flat_map(|(r, c)| matrix(r, c)),
        seed in any::<prop::sample::Index>(),
        value in -50i64..50,
    ) {
        let r = seed.index(m.rows());
        let c = seed.index(m.cols());
        let updated = m.set(Some(Int64::from(value)), r, c).unwrap();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                if (i, j) == (r, c) {
                    prop_assert_eq!(updated.get(i, j).unwrap(), Some(&Int64::from(value)));
                } else {
                    prop_assert_eq!(updated.get(i, j).unwrap(), m.get(i, j).unwrap());
                }
            }
        }
    }
}
