use battleship_hotseat::{BitBoard, BitBoardError};

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_rect_clips_at_edge() {
    let bb = BitBoard::<u128, 10>::rect(8..=10, 0..=1);
    assert_eq!(bb.count_ones(), 4);
    for (r, c) in [(8, 0), (8, 1), (9, 0), (9, 1)] {
        assert!(bb.get(r, c).unwrap());
    }
    assert!(!bb.get(7, 0).unwrap());
}

#[test]
fn test_rect_far_past_edge_is_empty() {
    assert!(BitBoard::<u128, 10>::rect(12..=usize::MAX, 0..=9).is_empty());
    let bb = BitBoard::<u128, 10>::rect(9..=usize::MAX, 9..=usize::MAX);
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_intersection() {
    let mut ships = BitBoard::<u128, 10>::new();
    ships.set(4, 4).unwrap();
    let near = BitBoard::<u128, 10>::rect(3..=5, 5..=7);
    let far = BitBoard::<u128, 10>::rect(0..=2, 0..=9);
    assert!(!(ships & near).is_empty());
    assert!((ships & far).is_empty());
    assert_eq!(near.count_ones(), 9);
    assert_eq!(far.count_ones(), 30);
}
