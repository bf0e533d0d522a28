//! Common types for Battleship: cell states, shot outcomes and board errors.

use crate::ship::ShipKind;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open water, or a cell whose content is not revealed.
    #[default]
    Empty,
    /// Part of a ship that has not been shot.
    Occupied,
    /// Part of a ship that has been shot at least once.
    Hit,
    /// Water that has been shot.
    Miss,
}

/// Result of a shot as seen by the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in water.
    Miss,
    /// Shot hit a ship that is still afloat (or was already sunk).
    Hit,
    /// Shot sank the carried ship.
    Sunk(ShipKind),
    /// Shot sank the last remaining ship of the fleet.
    AllSunk,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Endpoint outside the grid, or endpoints not on one row or column.
    InvalidPlacementBounds,
    /// Segment length does not match the ship being placed.
    InvalidPlacementLength(ShipKind),
    /// Segment touches or overlaps a ship already on the board.
    InvalidPlacementOverlap,
    /// Shot target outside the grid.
    InvalidShotBounds,
    /// Every catalog ship is already on the board.
    FleetComplete,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidPlacementBounds => write!(f, "Wrong ship location"),
            BoardError::InvalidPlacementLength(kind) => {
                write!(f, "Wrong length of the {}", kind.name())
            }
            BoardError::InvalidPlacementOverlap => {
                write!(f, "Ship placed too close to another one")
            }
            BoardError::InvalidShotBounds => write!(f, "Shot is outside the board"),
            BoardError::FleetComplete => write!(f, "All ships are already placed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
