use cnsd_core::{AdjacencyMatrix, CnsdError, ConnectionType, WeightedMatrix};
use tempfile::tempdir;

#[test]
fn undirected_f64_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("u_am.txt");

    let mut m = WeightedMatrix::new(3, ConnectionType::Undirected);
    m.set_weight(1, 2, 1.5).unwrap();
    m.set_weight(0, 1, 3.2).unwrap();
    m.to_file(&path).unwrap();

    let back = WeightedMatrix::from_file(&path).unwrap();
    assert_eq!(back.connection_type(), ConnectionType::Undirected);
    assert_eq!(back.node_count(), 3);
    assert_eq!(back.weights(), m.weights());
    assert_eq!(back.get(2, 1), 1.5);
    assert_eq!(back.get(1, 0), 3.2);
}

#[test]
fn directed_i32_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("d_am.txt");

    let mut m = AdjacencyMatrix::<i32>::new(5, ConnectionType::Directed);
    m.set_weight(1, 2, 8).unwrap();
    m.set_weight(4, 4, 999).unwrap();
    m.set_weight(0, 1, 3).unwrap();
    m.to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("D"));
    assert_eq!(lines.next(), Some("5"));
    assert!(lines.next().unwrap().ends_with("999 "));

    let back = AdjacencyMatrix::<i32>::from_file(&path).unwrap();
    assert_eq!(back.connection_type(), ConnectionType::Directed);
    assert_eq!(back.weights(), m.weights());
    assert_eq!(back.get(2, 1), 0);
}

#[test]
fn float_precision_survives_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("precise.txt");

    let mut m = WeightedMatrix::new(2, ConnectionType::Directed);
    m.set_weight(0, 1, 1.0 / 3.0).unwrap();
    m.set_weight(1, 0, -2.5e-12).unwrap();
    m.to_file(&path).unwrap();

    let back = WeightedMatrix::from_file(&path).unwrap();
    assert_eq!(back.weights(), m.weights());
}

#[test]
fn load_into_existing_matrix_replaces_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.txt");
    std::fs::write(&path, "U\n2\n0 1 1 0 \n").unwrap();

    let mut m = WeightedMatrix::new(4, ConnectionType::Directed);
    m.set_weight(3, 3, 10.0).unwrap();
    m.load_file(&path).unwrap();

    assert_eq!(m.node_count(), 2);
    assert_eq!(m.connection_type(), ConnectionType::Undirected);
    assert_eq!(m.weights(), &[0.0, 1.0, 1.0, 0.0]);
    // Ratchets carry over from before the load.
    assert_eq!(m.max_weight(), 10.0);
    assert_eq!(m.min_weight(), 0.0);
}

#[test]
fn missing_source_is_reported() {
    let dir = tempdir().unwrap();
    let err = WeightedMatrix::from_file(dir.path().join("nope.txt")).unwrap_err();
    match err {
        CnsdError::SourceUnavailable { path, .. } => assert!(path.ends_with("nope.txt")),
        other => panic!("unexpected error: {other}"),
    }
}
