//! Serde round-trip and rejection tests (requires the `serde` feature)

use ringmat_algebra::{Int64, Matrix, Zq};

#[test]
fn roundtrip_preserves_structure() {
    let m = Matrix::from_values(vec![
        vec![Int64::from(1), Int64::from(5)],
        vec![Int64::from(2), Int64::from(3)],
    ])
    .unwrap()
    .set(None, 1, 0)
    .unwrap();

    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,5],[null,3]]");

    let decoded: Matrix<Int64> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, m);
}

#[test]
fn roundtrip_modular_elements() {
    let zq = |v: u64| Zq::new(v, 3329).unwrap();
    let m = Matrix::from_values(vec![vec![zq(17), zq(3328)]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    let decoded: Matrix<Zq> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, m);
}

#[test]
fn decoded_elements_are_validated() {
    assert!(serde_json::from_str::<Zq>(r#"{"modulus":1,"value":0}"#).is_err());
    let z: Zq = serde_json::from_str(r#"{"modulus":7,"value":10}"#).unwrap();
    assert_eq!(z.value(), 3);
}

#[test]
fn null_row_rejected() {
    let err = serde_json::from_str::<Matrix<Int64>>("[[1,2],null,[3,4]]").unwrap_err();
    assert!(err.to_string().contains("Row 1"));
}

#[test]
fn ragged_grid_rejected() {
    let err = serde_json::from_str::<Matrix<Int64>>("[[1,5],[1,2,3,7],[2,3]]").unwrap_err();
    assert!(err.to_string().contains("columns"));
}

#[test]
fn empty_grid_rejected() {
    assert!(serde_json::from_str::<Matrix<Int64>>("[]").is_err());
    assert!(serde_json::from_str::<Matrix<Int64>>("[[]]").is_err());
}
