//! Game board state: the cell grid, placement checks and shot resolution.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, CellState};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::ShipKind;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Read-only snapshot of a board, either fully revealed or fog-of-war
/// filtered. Formatting it is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl BoardView {
    /// State shown for `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        coord.index().map(|(r, c)| self.cells[r][c])
    }

    /// Rows `A`..`J`, each holding columns `1`..`10`.
    pub fn rows(&self) -> &[[CellState; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of cells shown as `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|c| **c == state).count()
    }
}

/// Main board state: cell grid plus an occupancy index of ship cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
    ship_map: BB,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; GRID_SIZE]; GRID_SIZE],
            ship_map: BB::new(),
        }
    }

    /// True state of a cell, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        coord.index().map(|(r, c)| self.cells[r][c])
    }

    /// Number of cells covered by ships.
    pub fn ship_cells(&self) -> usize {
        self.ship_map.count_ones()
    }

    /// Both endpoints inside the grid and on a common row or column.
    pub fn is_located(begin: Coordinate, end: Coordinate) -> bool {
        begin.in_bounds()
            && end.in_bounds()
            && (begin.row() == end.row() || begin.col() == end.col())
    }

    /// Cells covered by an aligned segment, endpoints included.
    fn span(begin: Coordinate, end: Coordinate) -> usize {
        ((end.row() - begin.row()).abs() + (end.col() - begin.col()).abs() + 1) as usize
    }

    /// `true` iff the segment lies inside the grid, is horizontal or
    /// vertical, and covers exactly `length` cells.
    pub fn is_valid_placement(&self, begin: Coordinate, end: Coordinate, length: usize) -> bool {
        Self::is_located(begin, end) && Self::span(begin, end) == length
    }

    /// `true` iff any ship cell lies within one cell, diagonals included, of
    /// the `length` cells running from the low endpoint towards the other
    /// one. The zone is clipped at the grid edge; a zone entirely off the
    /// grid touches nothing.
    pub fn is_overlapped(&self, begin: Coordinate, end: Coordinate, length: usize) -> bool {
        if length == 0 {
            return false;
        }
        let (low, high) = Coordinate::normalize(begin, end);
        let run = i32::try_from(length - 1).unwrap_or(i32::MAX);
        let (last_row, last_col) = if low.row() == high.row() {
            (low.row(), low.col().saturating_add(run))
        } else {
            (low.row().saturating_add(run), low.col())
        };
        let edge = GRID_SIZE as i32 - 1;
        let rows = (low.row().saturating_sub(1).max(0), last_row.saturating_add(1).min(edge));
        let cols = (low.col().saturating_sub(1).max(0), last_col.saturating_add(1).min(edge));
        if rows.0 > rows.1 || cols.0 > cols.1 {
            return false;
        }
        let zone = BB::rect(
            rows.0 as usize..=rows.1 as usize,
            cols.0 as usize..=cols.1 as usize,
        );
        !(self.ship_map & zone).is_empty()
    }

    /// Run every placement check for `kind` and report the first failure:
    /// location, then length, then proximity to other ships.
    pub fn check_placement(
        &self,
        kind: ShipKind,
        begin: Coordinate,
        end: Coordinate,
    ) -> Result<(), BoardError> {
        if !Self::is_located(begin, end) {
            return Err(BoardError::InvalidPlacementBounds);
        }
        if !self.is_valid_placement(begin, end, kind.length()) {
            return Err(BoardError::InvalidPlacementLength(kind));
        }
        if self.is_overlapped(begin, end, kind.length()) {
            return Err(BoardError::InvalidPlacementOverlap);
        }
        Ok(())
    }

    /// Mark the segment occupied. The caller is expected to have run
    /// [`Board::check_placement`] first; nothing is re-validated here.
    pub fn place(&mut self, kind: ShipKind, begin: Coordinate, end: Coordinate) {
        debug_assert!(self.is_valid_placement(begin, end, kind.length()));
        let (low, high) = Coordinate::normalize(begin, end);
        let horizontal = low.row() == high.row();
        for i in 0..kind.length() as i32 {
            let coord = if horizontal {
                Coordinate::new(low.row(), low.col() + i)
            } else {
                Coordinate::new(low.row() + i, low.col())
            };
            if let Some((r, c)) = coord.index() {
                self.cells[r][c] = CellState::Occupied;
                let _ = self.ship_map.set(r, c);
            }
        }
    }

    /// Any in-bounds cell may be shot, including one already shot.
    pub fn is_valid_shot_target(&self, coord: Coordinate) -> bool {
        coord.in_bounds()
    }

    /// Apply a shot. Ship cells (shot before or not) become and report
    /// `Hit`; everything else becomes and reports `Miss`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<CellState, BoardError> {
        let (r, c) = coord.index().ok_or(BoardError::InvalidShotBounds)?;
        let result = match self.cells[r][c] {
            CellState::Occupied | CellState::Hit => CellState::Hit,
            CellState::Empty | CellState::Miss => CellState::Miss,
        };
        self.cells[r][c] = result;
        Ok(result)
    }

    /// Every cell's true state, for the owner.
    pub fn render_full(&self) -> BoardView {
        BoardView { cells: self.cells }
    }

    /// Only shot cells are revealed; the rest show as `Empty`.
    pub fn render_fog_of_war(&self) -> BoardView {
        let mut cells = self.cells;
        for cell in cells.iter_mut().flatten() {
            if *cell == CellState::Occupied {
                *cell = CellState::Empty;
            }
        }
        BoardView { cells }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{\n  ship_map: {:?},\n  cells: [", self.ship_map)?;
        for row in self.cells.iter() {
            writeln!(f, "    {:?},", row)?;
        }
        write!(f, "  ]\n}}")
    }
}
