//! Integration tests for the matrix engine

use ringmat_algebra::error::Error;
use ringmat_algebra::{Cell, Int64, Matrix, Zq};

fn int_matrix(rows: &[&[i64]]) -> Matrix<Int64> {
    Matrix::from_values(
        rows.iter()
            .map(|row| row.iter().copied().map(Int64::from).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn scalar_multiplication_scenario() {
    // [[1,5],[2,3],[1,7]] * 2 == [[2,10],[4,6],[2,14]]
    let m = int_matrix(&[&[1, 5], &[2, 3], &[1, 7]]);
    let scaled = m.scalar_mul(&Int64::from(2)).unwrap();
    assert_eq!(scaled, int_matrix(&[&[2, 10], &[4, 6], &[2, 14]]));
    // the receiver is unchanged
    assert_eq!(m, int_matrix(&[&[1, 5], &[2, 3], &[1, 7]]));
}

#[test]
fn multiplication_scenario() {
    // [[1,2,3],[4,5,6]] x [[7,8],[9,10],[11,12]] == [[58,64],[139,154]]
    let a = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
    let b = int_matrix(&[&[7, 8], &[9, 10], &[11, 12]]);
    let product = a.mul(&b).unwrap();
    assert_eq!(product.rows(), 2);
    assert_eq!(product.cols(), 2);
    assert_eq!(product, int_matrix(&[&[58, 64], &[139, 154]]));
}

#[test]
fn ragged_grid_rejected() {
    let rows: Vec<Vec<Cell<Int64>>> = [&[1i64, 5][..], &[1, 2, 3, 7], &[2, 3]]
        .iter()
        .map(|row| row.iter().copied().map(|v| Some(Int64::from(v))).collect())
        .collect();
    assert_eq!(
        Matrix::from_rows(rows).unwrap_err(),
        Error::Ragged {
            row: 1,
            expected: 2,
            actual: 4
        }
    );
}

#[test]
fn index_equal_to_dimension_rejected() {
    // Pins the strict bound: an index equal to the dimension is out of
    // range, never a silent one-past-the-end read.
    let m = int_matrix(&[&[1, 5], &[2, 3], &[1, 7]]);
    assert_eq!(
        m.get(m.rows(), 0).unwrap_err(),
        Error::Index {
            axis: "row",
            index: 3,
            len: 3
        }
    );
    assert_eq!(
        m.get(0, m.cols()).unwrap_err(),
        Error::Index {
            axis: "column",
            index: 2,
            len: 2
        }
    );
}

#[test]
fn transpose_involution() {
    let m = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
    let t = m.transpose();
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 2);
    assert_eq!(t.get(0, 1).unwrap(), Some(&Int64::from(4)));
    assert_eq!(t.transpose(), m);
}

#[test]
fn add_then_subtract_roundtrip() {
    let m = int_matrix(&[&[1, 5], &[2, 3]]);
    let n = int_matrix(&[&[4, 4], &[9, 9]]);
    assert_eq!(m.add(&n).unwrap().sub(&n).unwrap(), m);
}

#[test]
fn multiplication_is_associative() {
    let a = int_matrix(&[&[1, 2], &[3, 4]]);
    let b = int_matrix(&[&[5, 6, 7], &[8, 9, 10]]);
    let c = int_matrix(&[&[1], &[2], &[3]]);
    assert_eq!(
        a.mul(&b).unwrap().mul(&c).unwrap(),
        a.mul(&b.mul(&c).unwrap()).unwrap()
    );
}

#[test]
fn equal_matrices_hash_equal() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(m: &Matrix<Int64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        m.hash(&mut hasher);
        hasher.finish()
    }

    let a = int_matrix(&[&[1, 2], &[3, 4]]);
    let b = int_matrix(&[&[1, 2], &[3, 4]]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    // matrices work as map keys
    let mut seen = std::collections::HashMap::new();
    seen.insert(a, "first");
    assert_eq!(seen.get(&b), Some(&"first"));
}

#[test]
fn holes_equal_only_holes() {
    let full = int_matrix(&[&[1, 2]]);
    let holed = full.set(None, 0, 0).unwrap();
    let holed_again = full.set(None, 0, 0).unwrap();
    assert_ne!(full, holed);
    assert_eq!(holed, holed_again);
}

#[test]
fn matrix_over_modular_ring() {
    let zq = |v: u64| Zq::new(v, 3329).unwrap();
    let a = Matrix::from_values(vec![vec![zq(3000), zq(400)], vec![zq(17), zq(3328)]]).unwrap();
    let b = Matrix::from_values(vec![vec![zq(329), zq(2929)], vec![zq(3312), zq(1)]]).unwrap();

    // wraps modulo q
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.get(0, 0).unwrap(), Some(&zq(0)));
    assert_eq!(sum.get(1, 0).unwrap(), Some(&zq(0)));

    // additive roundtrip holds in Z/qZ
    assert_eq!(sum.sub(&b).unwrap(), a);

    // scalar multiply stays reduced
    let doubled = a.scalar_mul(&zq(2)).unwrap();
    assert_eq!(doubled.get(0, 0).unwrap(), Some(&zq(2671)));
}

#[test]
fn mixing_rings_fails_inside_matrix_ops() {
    let a = Matrix::from_values(vec![vec![Zq::new(1, 7).unwrap()]]).unwrap();
    let b = Matrix::from_values(vec![vec![Zq::new(1, 11).unwrap()]]).unwrap();
    assert!(matches!(a.add(&b).unwrap_err(), Error::Element(_)));
}

#[test]
fn constant_time_matrix_comparison() {
    use subtle::ConstantTimeEq;

    let zq = |v: u64| Zq::new(v, 97).unwrap();
    let a = Matrix::from_values(vec![vec![zq(1), zq(2)], vec![zq(3), zq(4)]]).unwrap();
    let b = a.clone();
    let c = a.set(Some(zq(5)), 1, 1).unwrap();
    assert_eq!(a.ct_eq(&b).unwrap_u8(), 1);
    assert_eq!(a.ct_eq(&c).unwrap_u8(), 0);
}

#[test]
fn sampled_matrix_is_well_formed() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let m = Matrix::from_fn(4, 3, |_, _| Some(Zq::sample_uniform(&mut rng, 3329).unwrap()))
        .unwrap();
    assert_eq!(m.rows(), 4);
    assert_eq!(m.cols(), 3);
    for r in 0..4 {
        for c in 0..3 {
            assert!(m.get(r, c).unwrap().unwrap().value() < 3329);
        }
    }
}

#[test]
fn zeroize_wipes_cells() {
    use zeroize::Zeroize;

    let mut m = Matrix::from_values(vec![vec![Zq::new(11, 97).unwrap()]]).unwrap();
    m.zeroize();
    assert_eq!(m.get(0, 0).unwrap().unwrap().value(), 0);
}
