use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, warn};

use crate::{
    board::Board,
    common::{BoardError, CellState, ShotOutcome},
    config::{NUM_SHIPS, SHIPS},
    coordinate::Coordinate,
    protocol::{Event, Input, Screen},
    ship::{ShipInstance, ShipKind},
};

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// One side of the game: a board and the fleet placed on it.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    seat: Seat,
    board: Board,
    fleet: Vec<ShipInstance>,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seat,
            board: Board::new(),
            fleet: Vec::with_capacity(NUM_SHIPS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ships placed so far, in catalog order.
    pub fn fleet(&self) -> &[ShipInstance] {
        &self.fleet
    }

    /// The catalog entry still waiting to be placed, if any.
    pub fn next_kind(&self) -> Option<ShipKind> {
        SHIPS.get(self.fleet.len()).copied()
    }

    pub fn is_fleet_complete(&self) -> bool {
        self.fleet.len() == NUM_SHIPS
    }

    /// Validate and commit the next catalog ship on `begin`-`end` and return
    /// its kind. Endpoints may come in either order.
    pub fn place_ship(
        &mut self,
        begin: Coordinate,
        end: Coordinate,
    ) -> Result<ShipKind, BoardError> {
        let kind = self.next_kind().ok_or(BoardError::FleetComplete)?;
        let (begin, end) = Coordinate::normalize(begin, end);
        self.board.check_placement(kind, begin, end)?;
        self.board.place(kind, begin, end);
        self.fleet.push(ShipInstance::new(kind, begin, end));
        debug!("{} placed {} at {}-{}", self.name, kind.name(), begin, end);
        Ok(kind)
    }

    /// Ask `input` for every ship not yet placed, in catalog order, until
    /// each one lands on a legal segment. Refused segments are reported to
    /// `screen` and asked for again.
    pub fn place_fleet<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<(), I::Error>
    where
        I: Input,
        S: Screen,
    {
        screen.show(Event::PlacementStarted {
            seat: self.seat,
            player: self.name.clone(),
        });
        screen.show(Event::FleetUpdated {
            view: self.board.render_full(),
        });
        while let Some(kind) = self.next_kind() {
            screen.show(Event::PlacementPrompt { kind });
            let (begin, end) = input.read_segment(kind)?;
            match self.place_ship(begin, end) {
                Ok(_) => screen.show(Event::FleetUpdated {
                    view: self.board.render_full(),
                }),
                Err(err) => {
                    warn!("{}: {} at {}-{} refused: {}", self.name, kind.name(), begin, end, err);
                    screen.show(Event::Rejected(err));
                }
            }
        }
        Ok(())
    }

    /// Apply an opponent's shot to this board and fleet.
    ///
    /// Segments never share a cell, so at most one ship's bookkeeping
    /// changes. `AllSunk` is only reported once the whole fleet has been
    /// placed and sunk.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.board.resolve_shot(coord)? == CellState::Miss {
            debug!("{}: shot at {} missed", self.name, coord);
            return Ok(ShotOutcome::Miss);
        }
        let mut sunk_now = None;
        if let Some(ship) = self.fleet.iter_mut().find(|ship| ship.contains(coord)) {
            let was_sunk = ship.is_sunk();
            ship.register_hit(coord);
            if !was_sunk && ship.is_sunk() {
                sunk_now = Some(ship.kind());
            }
        }
        let outcome = if self.all_sunk() {
            ShotOutcome::AllSunk
        } else if let Some(kind) = sunk_now {
            ShotOutcome::Sunk(kind)
        } else {
            ShotOutcome::Hit
        };
        debug!("{}: shot at {} -> {:?}", self.name, coord, outcome);
        Ok(outcome)
    }

    /// Ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when the full fleet is placed and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.is_fleet_complete() && self.fleet.iter().all(ShipInstance::is_sunk)
    }
}
