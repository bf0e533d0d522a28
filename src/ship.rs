//! Ship definitions and per-ship hit bookkeeping.

use core::fmt;

use crate::common::CellState;
use crate::config::MAX_SHIP_LENGTH;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipKind {
    name: &'static str,
    length: usize,
}

impl ShipKind {
    /// Catalog entries only; `length` must not exceed `MAX_SHIP_LENGTH`.
    pub(crate) const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship committed to a board.
///
/// `cells[i]` records whether the i-th cell from the low endpoint has been
/// hit. That record, not the counter, decides whether a hit still counts:
/// `remaining` only drops when a cell flips to `Hit`, so repeated shots at
/// the same cell leave it alone.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShipInstance {
    kind: ShipKind,
    begin: Coordinate,
    end: Coordinate,
    orientation: Orientation,
    cells: [CellState; MAX_SHIP_LENGTH],
    remaining: usize,
}

impl ShipInstance {
    /// Build from a kind and a segment that has already passed placement
    /// checks. Endpoints may come in either order.
    pub fn new(kind: ShipKind, begin: Coordinate, end: Coordinate) -> Self {
        let (begin, end) = Coordinate::normalize(begin, end);
        let orientation = if begin.row() == end.row() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut cells = [CellState::Empty; MAX_SHIP_LENGTH];
        for cell in cells.iter_mut().take(kind.length()) {
            *cell = CellState::Occupied;
        }
        Self {
            kind,
            begin,
            end,
            orientation,
            cells,
            remaining: kind.length(),
        }
    }

    /// Position of `coord` along the segment, if the segment covers it.
    fn offset(&self, coord: Coordinate) -> Option<usize> {
        let (on_line, offset) = match self.orientation {
            Orientation::Horizontal => {
                (coord.row() == self.begin.row(), coord.col() - self.begin.col())
            }
            Orientation::Vertical => {
                (coord.col() == self.begin.col(), coord.row() - self.begin.row())
            }
        };
        usize::try_from(offset)
            .ok()
            .filter(|offset| on_line && *offset < self.kind.length())
    }

    /// Record a shot at `coord`. Returns `true` if the coordinate lies on
    /// this ship, whether or not that cell was already hit.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        let Some(offset) = self.offset(coord) else {
            return false;
        };
        let Some(cell) = self.cells.get_mut(offset) else {
            return false;
        };
        if *cell != CellState::Hit {
            *cell = CellState::Hit;
            self.remaining -= 1;
        }
        true
    }

    /// `true` if the coordinate lies on this ship.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.offset(coord).is_some()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Cells not yet hit.
    pub fn remaining_hit_points(&self) -> usize {
        self.remaining
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Normalized endpoints `(low, high)`.
    pub fn segment(&self) -> (Coordinate, Coordinate) {
        (self.begin, self.end)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Per-cell record from the low endpoint: `Occupied` or `Hit`.
    pub fn cells(&self) -> &[CellState] {
        &self.cells[..self.kind.length()]
    }

    /// Coordinates covered by the ship, from the low endpoint.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.kind.length() as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.begin.row(), self.begin.col() + i),
            Orientation::Vertical => Coordinate::new(self.begin.row() + i, self.begin.col()),
        })
    }
}

impl fmt::Debug for ShipInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", segment: {}-{}, orientation: {:?}, remaining: {} }}",
            self.kind.name(),
            self.begin,
            self.end,
            self.orientation,
            self.remaining,
        )
    }
}
