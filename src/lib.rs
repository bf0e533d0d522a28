#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod protocol;
mod random;
pub mod script;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV};
pub use player::*;
pub use protocol::*;
pub use random::*;
pub use script::*;
pub use ship::*;
