//! Board state: per-cell attack status and one side's fleet.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::{AttackOutcome, BoardError, CellStatus, Cells};
use crate::config::{fleet_lengths, CELL_COUNT, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Read access to the attack status of a target grid.
pub trait CellView {
    /// Status of the cell at `index`.
    ///
    /// # Panics
    /// If `index >= CELL_COUNT`.
    fn cell_status(&self, index: usize) -> CellStatus;
}

/// Attack status of every cell of one grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [CellStatus; CELL_COUNT],
}

impl Grid {
    /// A grid with every cell untouched.
    pub fn new() -> Self {
        Grid {
            cells: [CellStatus::Untouched; CELL_COUNT],
        }
    }

    pub fn status(&self, index: usize) -> Option<CellStatus> {
        self.cells.get(index).copied()
    }

    /// Overwrite the status of a single cell.
    pub fn set(&mut self, index: usize, status: CellStatus) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfBounds(index))?;
        *cell = status;
        Ok(())
    }

    /// Mark every member of `cells` as part of a sunk ship.
    pub fn mark_sunk(&mut self, cells: Cells) {
        for index in cells.iter() {
            self.cells[index] = CellStatus::SunkMember;
        }
    }

    /// Indices still `Untouched`, in row-major order.
    pub fn untouched(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == CellStatus::Untouched)
            .map(|(i, _)| i)
    }

    /// Number of cells with the given status.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|s| **s == status).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellView for Grid {
    fn cell_status(&self, index: usize) -> CellStatus {
        self.cells[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, status) in self.cells.iter().enumerate() {
            let ch = match status {
                CellStatus::Untouched => '.',
                CellStatus::Hit => 'X',
                CellStatus::Miss => 'O',
                CellStatus::SunkMember => '#',
            };
            write!(f, "{}", ch)?;
            if i % GRID_SIZE == GRID_SIZE - 1 {
                if i + 1 < CELL_COUNT {
                    writeln!(f)?;
                }
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        fmt::Display::fmt(self, f)
    }
}

/// Ground truth for one side: where its ships are and what has been attacked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    occupied: Cells,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            ships: Vec::new(),
            occupied: Cells::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all placed ships.
    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    /// Ship occupying `index`, if any.
    pub fn ship_at(&self, index: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(index))
    }

    /// Fleet lengths that have not been placed yet, largest first.
    pub fn unplaced_lengths(&self) -> Vec<usize> {
        let mut remaining: Vec<usize> = fleet_lengths().to_vec();
        for ship in &self.ships {
            if let Some(pos) = remaining.iter().position(|&l| l == ship.length()) {
                remaining.remove(pos);
            }
        }
        remaining
    }

    /// Returns `true` once every ship of the fleet has been placed.
    pub fn is_fully_placed(&self) -> bool {
        self.unplaced_lengths().is_empty()
    }

    /// Place a ship. Returns its index in the fleet.
    pub fn place(&mut self, ship: Ship) -> Result<usize, BoardError> {
        if !self.unplaced_lengths().contains(&ship.length()) {
            return Err(BoardError::InvalidLength(ship.length()));
        }
        if !(self.occupied & ship.cells()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupied |= ship.cells();
        self.ships.push(ship);
        debug!("placed {:?}", ship);
        Ok(self.ships.len() - 1)
    }

    /// Place a ship given the cells it should occupy.
    pub fn place_cells(&mut self, indices: &[usize]) -> Result<usize, BoardError> {
        let ship = Ship::from_cells(indices)?;
        self.place(ship)
    }

    /// Draws a random non-overlapping ship of `length`.
    ///
    /// Gives up with `UnableToPlaceShip` after `MAX_PLACEMENT_ATTEMPTS` draws.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Result<Ship, BoardError> {
        if length == 0 || length > GRID_SIZE {
            return Err(BoardError::InvalidLength(length));
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (GRID_SIZE - length, GRID_SIZE - 1),
                Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - length),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let ship = Ship::new(length, orientation, x, y)?;
            if (self.occupied & ship.cells()).is_empty() {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly place every ship not yet on the board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for length in self.unplaced_lengths() {
            let ship = self.random_placement(rng, length)?;
            self.place(ship)?;
        }
        Ok(())
    }

    /// Resolve an attack on `index` against the fleet.
    pub fn attack(&mut self, index: usize) -> Result<AttackOutcome, BoardError> {
        match self.grid.status(index) {
            None => return Err(BoardError::IndexOutOfBounds(index)),
            Some(CellStatus::Untouched) => {}
            Some(_) => return Err(BoardError::AlreadyAttacked(index)),
        }
        if !self.occupied.contains(index) {
            self.grid.set(index, CellStatus::Miss)?;
            return Ok(AttackOutcome::Miss);
        }
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.contains(index))
            .ok_or(BoardError::UnknownShipHit(index))?;
        if !ship.register_hit(index) {
            return Err(BoardError::UnknownShipHit(index));
        }
        if ship.is_sunk() {
            let (length, cells) = (ship.length(), ship.cells());
            self.grid.mark_sunk(cells);
            Ok(AttackOutcome::Sunk { length, cells })
        } else {
            self.grid.set(index, CellStatus::Hit)?;
            Ok(AttackOutcome::Hit)
        }
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl CellView for Board {
    fn cell_status(&self, index: usize) -> CellStatus {
        self.grid.cell_status(index)
    }
}
