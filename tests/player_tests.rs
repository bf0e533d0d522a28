use battleship_hotseat::{
    BoardError, CellState, Coordinate, Event, Player, RecordingScreen, ScriptError,
    ScriptedInput, Seat, ShotOutcome, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS,
};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

/// One legal segment per catalog entry, a blank row between ships.
const LAYOUT: [(&str, &str); NUM_SHIPS] = [
    ("A1", "A5"),
    ("C1", "C4"),
    ("E1", "E3"),
    ("G1", "G3"),
    ("I1", "I2"),
];

fn full_fleet() -> Player {
    placed(Player::new(Seat::First, "Player 1"), &LAYOUT)
}

/// Place `segments` as the next catalog ships.
fn placed(mut player: Player, segments: &[(&str, &str)]) -> Player {
    for (begin, end) in segments {
        player.place_ship(c(begin), c(end)).unwrap();
    }
    player
}

fn ship_cells() -> Vec<Coordinate> {
    full_fleet()
        .fleet()
        .iter()
        .flat_map(|ship| ship.coordinates().collect::<Vec<_>>())
        .collect()
}

#[test]
fn test_destroyer_scenario() {
    let mut player = placed(
        Player::new(Seat::Second, "Player 2"),
        &[("F1", "F5"), ("H1", "H4"), ("J1", "J3"), ("D6", "D8")],
    );
    assert_eq!(player.place_ship(c("B2"), c("B3")), Ok(SHIPS[4]));
    assert_eq!(player.board().cell(c("B2")), Some(CellState::Occupied));
    assert_eq!(player.board().cell(c("B3")), Some(CellState::Occupied));
    let destroyer = 4;

    assert_eq!(player.receive_shot(c("B2")), Ok(ShotOutcome::Hit));
    assert_eq!(player.fleet()[destroyer].remaining_hit_points(), 1);
    assert!(!player.fleet()[destroyer].is_sunk());

    assert_eq!(player.receive_shot(c("B3")), Ok(ShotOutcome::Sunk(SHIPS[4])));
    assert_eq!(player.fleet()[destroyer].remaining_hit_points(), 0);

    // board still reports the hit, the count stays at zero
    assert_eq!(player.receive_shot(c("B2")), Ok(ShotOutcome::Hit));
    assert_eq!(player.board().cell(c("B2")), Some(CellState::Hit));
    assert_eq!(player.fleet()[destroyer].remaining_hit_points(), 0);
    assert_eq!(player.ships_remaining(), 4);
}

#[test]
fn test_placement_rejections() {
    let mut player = placed(
        Player::new(Seat::First, "Player 1"),
        &[("J1", "J5"), ("H7", "H10"), ("A8", "A10")],
    );
    assert_eq!(player.next_kind(), Some(SHIPS[3]));
    assert_eq!(
        player.place_ship(c("C1"), c("C4")),
        Err(BoardError::InvalidPlacementLength(SHIPS[3]))
    );
    assert_eq!(player.place_ship(c("E5"), c("E7")), Ok(SHIPS[3]));
    assert_eq!(
        player.place_ship(c("D5"), c("D6")),
        Err(BoardError::InvalidPlacementOverlap)
    );
    assert_eq!(
        player.place_ship(c("K1"), c("K2")),
        Err(BoardError::InvalidPlacementBounds)
    );
    // refused placements leave no trace
    assert_eq!(player.fleet().len(), 4);
    assert_eq!(player.next_kind(), Some(SHIPS[4]));
    assert_eq!(player.board().ship_cells(), 5 + 4 + 3 + 3);
}

#[test]
fn test_endpoints_in_either_order() {
    let mut player = Player::new(Seat::First, "Player 1");
    assert_eq!(player.place_ship(c("A5"), c("A1")), Ok(SHIPS[0]));
    assert_eq!(player.fleet()[0].segment(), (c("A1"), c("A5")));
    assert_eq!(player.board().ship_cells(), 5);
}

#[test]
fn test_ships_follow_catalog_order() {
    let mut player = Player::new(Seat::First, "Player 1");
    // a destroyer-sized segment cannot jump the queue
    assert_eq!(
        player.place_ship(c("A1"), c("A2")),
        Err(BoardError::InvalidPlacementLength(SHIPS[0]))
    );
    assert_eq!(player.next_kind(), Some(SHIPS[0]));
    assert!(player.fleet().is_empty());

    for (i, (begin, end)) in LAYOUT.iter().enumerate() {
        assert_eq!(player.place_ship(c(begin), c(end)), Ok(SHIPS[i]));
    }
    let kinds: Vec<_> = player.fleet().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, SHIPS.to_vec());
}

#[test]
fn test_no_sixth_ship() {
    let mut player = full_fleet();
    assert_eq!(player.next_kind(), None);
    assert_eq!(
        player.place_ship(c("I9"), c("I10")),
        Err(BoardError::FleetComplete)
    );
    assert_eq!(player.fleet().len(), NUM_SHIPS);
    assert_eq!(player.board().cell(c("I9")), Some(CellState::Empty));

    // the fleet can still be finished off
    let mut last = ShotOutcome::Miss;
    for cell in ship_cells() {
        last = player.receive_shot(cell).unwrap();
    }
    assert_eq!(last, ShotOutcome::AllSunk);
    assert!(player.all_sunk());
}

#[test]
fn test_shot_outside_grid_rejected_without_mutation() {
    let mut player = full_fleet();
    let before = player.board().render_full();
    assert_eq!(player.receive_shot(c("K1")), Err(BoardError::InvalidShotBounds));
    assert_eq!(player.board().render_full(), before);
    assert_eq!(player.ships_remaining(), NUM_SHIPS);
}

#[test]
fn test_miss_touches_no_ship() {
    let mut player = full_fleet();
    assert_eq!(player.receive_shot(c("B1")), Ok(ShotOutcome::Miss));
    assert!(player.fleet().iter().all(|s| s.remaining_hit_points() == s.kind().length()));
}

#[test]
fn test_all_sunk_on_last_cell_only() {
    let mut player = full_fleet();
    let cells = ship_cells();
    assert_eq!(cells.len(), TOTAL_SHIP_CELLS);

    let (last, rest) = cells.split_last().unwrap();
    for cell in rest {
        let outcome = player.receive_shot(*cell).unwrap();
        assert_ne!(outcome, ShotOutcome::AllSunk);
        // repeats never finish the fleet early
        assert_ne!(player.receive_shot(*cell).unwrap(), ShotOutcome::AllSunk);
    }
    assert!(!player.all_sunk());
    assert_eq!(player.ships_remaining(), 1);
    assert_eq!(player.receive_shot(*last), Ok(ShotOutcome::AllSunk));
    assert!(player.all_sunk());
}

#[test]
fn test_one_sunk_per_ship() {
    let mut player = full_fleet();
    let mut sunk = Vec::new();
    for cell in ship_cells() {
        if let ShotOutcome::Sunk(kind) = player.receive_shot(cell).unwrap() {
            sunk.push(kind.name());
        }
    }
    // the destroyer goes last and finishes the fleet
    assert_eq!(sunk, vec!["Carrier", "Battleship", "Submarine", "Cruiser"]);
}

#[test]
fn test_place_fleet_retries_until_legal() {
    let mut input = ScriptedInput::new()
        .segment(c("A1"), c("A5"))
        // wrong length, then diagonal, then too close
        .segment(c("C1"), c("C3"))
        .segment(c("C1"), c("F4"))
        .segment(c("B1"), c("B4"))
        .segment(c("C4"), c("C1"))
        .segment(c("E1"), c("E3"))
        .segment(c("G1"), c("G3"))
        .segment(c("K1"), c("K2"))
        .segment(c("I2"), c("I1"));
    let mut screen = RecordingScreen::new();
    let mut player = Player::new(Seat::First, "Player 1");

    player.place_fleet(&mut input, &mut screen).unwrap();
    assert!(player.is_fleet_complete());
    assert_eq!(input.remaining(), 0);
    assert_eq!(player.board().ship_cells(), TOTAL_SHIP_CELLS);

    let rejected: Vec<_> = screen
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::Rejected(err) => Some(*err),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![
            BoardError::InvalidPlacementLength(SHIPS[1]),
            BoardError::InvalidPlacementBounds,
            BoardError::InvalidPlacementOverlap,
            BoardError::InvalidPlacementBounds,
        ]
    );
    let prompts = screen
        .events()
        .iter()
        .filter(|e| matches!(e, Event::PlacementPrompt { .. }))
        .count();
    assert_eq!(prompts, 9);
}

#[test]
fn test_place_fleet_propagates_input_failure() {
    let mut input = ScriptedInput::new().segment(c("A1"), c("A5"));
    let mut screen = RecordingScreen::new();
    let mut player = Player::new(Seat::First, "Player 1");
    assert_eq!(
        player.place_fleet(&mut input, &mut screen),
        Err(ScriptError::Exhausted)
    );
    assert_eq!(player.fleet().len(), 1);
}
