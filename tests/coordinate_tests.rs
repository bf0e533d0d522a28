use battleship_hotseat::Coordinate;
use proptest::prelude::*;

#[test]
fn test_label_to_ordinals() {
    let coord = Coordinate::from_label('B', 3);
    assert_eq!((coord.row(), coord.col()), (1, 2));
    assert!(coord.in_bounds());
    assert_eq!(coord.index(), Some((1, 2)));

    let lower = Coordinate::from_label('j', 10);
    assert_eq!((lower.row(), lower.col()), (9, 9));
}

#[test]
fn test_out_of_range_labels_survive_parsing() {
    let k1: Coordinate = "K1".parse().unwrap();
    assert_eq!(k1.row(), 10);
    assert!(!k1.in_bounds());
    assert_eq!(k1.index(), None);

    let a11: Coordinate = "A11".parse().unwrap();
    assert_eq!(a11.col(), 10);
    assert!(!a11.in_bounds());

    let a0: Coordinate = "A0".parse().unwrap();
    assert_eq!(a0.col(), -1);
    assert!(!a0.in_bounds());
}

#[test]
fn test_malformed_tokens_rejected() {
    for token in ["", "A", "5A", "AA", "A-1", "A 1", "?3", "B2x"] {
        assert!(token.parse::<Coordinate>().is_err(), "{:?} should not parse", token);
    }
}

#[test]
fn test_normalize_orders_endpoints() {
    let a = Coordinate::from_label('C', 7);
    let b = Coordinate::from_label('C', 3);
    assert_eq!(Coordinate::normalize(a, b), (b, a));
    assert_eq!(Coordinate::normalize(b, a), (b, a));

    let top = Coordinate::from_label('A', 4);
    let bottom = Coordinate::from_label('D', 4);
    assert_eq!(Coordinate::normalize(bottom, top), (top, bottom));
}

#[test]
fn test_normalize_keeps_diagonal_diagonal() {
    let (low, high) = Coordinate::normalize(
        Coordinate::from_label('A', 5),
        Coordinate::from_label('B', 1),
    );
    assert!(low.row() < high.row());
    assert!(low.col() < high.col());
}

proptest! {
    #[test]
    fn label_roundtrip(row in 0u8..10, number in 1i32..=10) {
        let letter = (b'A' + row) as char;
        let coord = Coordinate::from_label(letter, number);
        prop_assert!(coord.in_bounds());
        prop_assert_eq!(coord.letter(), Some(letter));
        prop_assert_eq!(coord.number(), number);

        let text = coord.to_string();
        prop_assert_eq!(text.parse::<Coordinate>(), Ok(coord));
    }

    #[test]
    fn normalize_is_order_insensitive(
        r1 in 0i32..10, c1 in 0i32..10, r2 in 0i32..10, c2 in 0i32..10,
    ) {
        let a = Coordinate::new(r1, c1);
        let b = Coordinate::new(r2, c2);
        let (low, high) = Coordinate::normalize(a, b);
        prop_assert_eq!((low, high), Coordinate::normalize(b, a));
        prop_assert!(low.row() <= high.row());
        prop_assert!(low.col() <= high.col());
    }
}
