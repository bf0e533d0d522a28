//! Seeded random input for headless games.
//!
//! Segments are drawn without looking at the board, so crowded placements get
//! refused by the rules and drawn again. Shots work through a shuffled list of
//! every cell, one list per seat, alternating seats on each call.

use alloc::vec::Vec;
use core::convert::Infallible;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::player::Seat;
use crate::protocol::Input;
use crate::ship::{Orientation, ShipKind};

const GRID_SIZE: i32 = BOARD_SIZE as i32;

pub struct RandomInput {
    rng: SmallRng,
    targets: [Vec<Coordinate>; 2],
    shooter: Seat,
    segments: usize,
}

impl RandomInput {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            targets: [Vec::new(), Vec::new()],
            shooter: Seat::First,
            segments: 0,
        }
    }

    /// Segments handed out so far, refused ones included.
    pub fn segments_drawn(&self) -> usize {
        self.segments
    }

    fn shuffled_grid(&mut self) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| Coordinate::new(r, c)))
            .collect();
        cells.shuffle(&mut self.rng);
        cells
    }
}

impl Input for RandomInput {
    type Error = Infallible;

    fn read_segment(&mut self, kind: ShipKind) -> Result<(Coordinate, Coordinate), Infallible> {
        self.segments += 1;
        let span = kind.length() as i32 - 1;
        let orient = if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orient {
            Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - 1 - span),
            Orientation::Vertical => (GRID_SIZE - 1 - span, GRID_SIZE - 1),
        };
        let r = self.rng.random_range(0..=max_r);
        let c = self.rng.random_range(0..=max_c);
        let begin = Coordinate::new(r, c);
        let end = match orient {
            Orientation::Horizontal => Coordinate::new(r, c + span),
            Orientation::Vertical => Coordinate::new(r + span, c),
        };
        // either order is legal input
        if self.rng.random_bool(0.5) {
            Ok((begin, end))
        } else {
            Ok((end, begin))
        }
    }

    fn read_shot(&mut self) -> Result<Coordinate, Infallible> {
        let seat = self.shooter.index();
        if self.targets[seat].is_empty() {
            self.targets[seat] = self.shuffled_grid();
        }
        self.shooter = self.shooter.other();
        Ok(self.targets[seat]
            .pop()
            .unwrap_or_else(|| Coordinate::new(0, 0)))
    }

    fn acknowledge(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
