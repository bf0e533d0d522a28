use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet catalog in placement order.
pub const SHIPS: [ShipKind; NUM_SHIPS] = [
    ShipKind::new("Carrier", 5),
    ShipKind::new("Battleship", 4),
    ShipKind::new("Submarine", 3),
    ShipKind::new("Cruiser", 3),
    ShipKind::new("Destroyer", 2),
];

/// Longest ship in the catalog; sizes the per-ship hit record.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
