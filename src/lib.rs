#![cfg_attr(not(feature = "std"), no_std)]

//! Battleship opponent engine: board state, arrangement enumeration,
//! probability density and hunt/target attack selection.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arrangement;
mod bitboard;
mod board;
mod common;
mod config;
mod density;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod targeting;

pub use arrangement::{enumerate, Arrangement, Direction, Search};
pub use bitboard::{BitBoard, BitBoardError, Indices};
pub use board::{Board, CellView, Grid};
pub use common::*;
pub use config::*;
pub use density::{density, ProbabilityMap};
pub use game::{GameError, GameState, GameStatus, Phase, Turn};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use ship::{Orientation, Ship, ShipDef};
pub use targeting::{Mode, TargetingStrategy};
