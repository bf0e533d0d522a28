//! Interfaces between the rules core and the outside world.
//!
//! The core never reads or prints text. It pulls raw coordinates from an
//! [`Input`] and pushes [`Event`]s to a [`Screen`].

use alloc::string::String;

use crate::board::BoardView;
use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::player::Seat;
use crate::ship::ShipKind;

/// Source of player decisions. One handle serves both seats.
pub trait Input {
    type Error;

    /// Endpoints for the ship about to be placed, in whatever order the
    /// player gave them. Nothing is validated yet.
    fn read_segment(&mut self, kind: ShipKind) -> Result<(Coordinate, Coordinate), Self::Error>;

    /// Target for the next shot. Nothing is validated yet.
    fn read_shot(&mut self) -> Result<Coordinate, Self::Error>;

    /// Block until the device has been passed on.
    fn acknowledge(&mut self) -> Result<(), Self::Error>;
}

/// Something the display should know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A seat begins placing its fleet.
    PlacementStarted { seat: Seat, player: String },
    /// The next ship to place.
    PlacementPrompt { kind: ShipKind },
    /// Owner's board after a ship was committed.
    FleetUpdated { view: BoardView },
    /// The last input was refused and will be asked for again.
    Rejected(BoardError),
    /// Pass the device and wait for acknowledgment.
    HandoffRequested,
    /// Both fleets are down; shooting begins.
    BattleStarted,
    /// A seat is about to shoot.
    TurnStarted {
        seat: Seat,
        player: String,
        enemy: BoardView,
        own: BoardView,
    },
    /// A shot was applied to the waiting seat's board.
    ShotResolved {
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// The game ended; the shooter of the last shot won.
    GameOver { seat: Seat, winner: String },
}

/// Sink for [`Event`]s.
pub trait Screen {
    fn show(&mut self, event: Event);
}
