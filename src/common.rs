//! Common types: cell status, attack outcomes, errors and index helpers.

use core::fmt;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::GRID_SIZE;

/// Set of cells on the game grid.
pub type Cells = BitBoard<u128, GRID_SIZE>;

/// Column of a cell index.
#[inline]
pub const fn cell_x(index: usize) -> usize {
    index % GRID_SIZE
}

/// Row of a cell index.
#[inline]
pub const fn cell_y(index: usize) -> usize {
    index / GRID_SIZE
}

/// Cell index of column `x`, row `y`.
#[inline]
pub const fn cell_index(x: usize, y: usize) -> usize {
    y * GRID_SIZE + x
}

/// What is known about a single cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Untouched,
    Hit,
    Miss,
    /// Part of a ship confirmed sunk.
    SunkMember,
}

impl CellStatus {
    /// Misses and sunk cells can never hold an afloat ship.
    #[inline]
    pub fn blocks_placement(self) -> bool {
        matches!(self, CellStatus::Miss | CellStatus::SunkMember)
    }
}

/// Result of resolving an attack against ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The attack sank a ship; carries its length and every cell it occupied.
    Sunk { length: usize, cells: Cells },
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Cell index outside the grid.
    IndexOutOfBounds(usize),
    /// Length is not one of the fleet's (remaining) ship lengths.
    InvalidLength(usize),
    /// Cells do not form a straight contiguous line.
    InvalidShape,
    ShipOutOfBounds,
    ShipOverlaps,
    /// Random placement gave up after the configured number of attempts.
    UnableToPlaceShip,
    /// Cell was already attacked.
    AlreadyAttacked(usize),
    /// Occupancy mask and fleet disagree.
    UnknownShipHit(usize),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::IndexOutOfBounds(i) => write!(f, "Cell {} is outside the grid", i),
            BoardError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::InvalidShape => write!(f, "Ship cells must form a straight line"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::AlreadyAttacked(i) => write!(f, "Cell {} was already attacked", i),
            BoardError::UnknownShipHit(i) => write!(f, "No ship found at occupied cell {}", i),
        }
    }
}

/// Errors returned by the targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Every cell of the target grid has been attacked.
    NoCandidateCell,
    /// An outcome was reported for a cell that is already resolved.
    AlreadyResolved(usize),
    IndexOutOfBounds(usize),
    /// A sunk report that does not cover the attacked cell or whose length
    /// disagrees with its cells.
    InconsistentOutcome(usize),
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::NoCandidateCell => write!(f, "No untouched cell left to attack"),
            TargetingError::AlreadyResolved(i) => write!(f, "Cell {} is already resolved", i),
            TargetingError::IndexOutOfBounds(i) => write!(f, "Cell {} is outside the grid", i),
            TargetingError::InconsistentOutcome(i) => {
                write!(f, "Sunk outcome for cell {} does not match the sunk ship", i)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
