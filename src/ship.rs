//! Ship definitions and placement geometry.

use core::fmt;

use crate::common::{cell_index, cell_x, cell_y, BoardError, Cells};
use crate::config::{CELL_COUNT, GRID_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Index of the cell `k` steps from (`x`, `y`) along this orientation.
    #[inline]
    pub fn step(self, x: usize, y: usize, k: usize) -> usize {
        match self {
            Orientation::Horizontal => cell_index(x + k, y),
            Orientation::Vertical => cell_index(x, y + k),
        }
    }
}

/// Named ship class of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A placed ship. Its shape never changes; only the hit counter does.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: usize,
    orientation: Orientation,
    length: usize,
    cells: Cells,
    hits: usize,
}

impl Ship {
    /// Place a ship of `length` with its first cell at (`x`, `y`).
    pub fn new(length: usize, orientation: Orientation, x: usize, y: usize) -> Result<Self, BoardError> {
        if length == 0 || x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = match orientation {
            Orientation::Horizontal => x + length,
            Orientation::Vertical => y + length,
        };
        if end > GRID_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = Cells::from_indices((0..length).map(|k| orientation.step(x, y, k)))?;
        Ok(Ship {
            origin: cell_index(x, y),
            orientation,
            length,
            cells,
            hits: 0,
        })
    }

    /// Build a ship from an unordered list of cell indices.
    ///
    /// The cells must be distinct and form one horizontal or vertical run.
    /// A single cell is treated as horizontal.
    pub fn from_cells(indices: &[usize]) -> Result<Self, BoardError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= CELL_COUNT) {
            return Err(BoardError::IndexOutOfBounds(bad));
        }
        let set = Cells::from_indices(indices.iter().copied())?;
        if set.count_ones() != indices.len() || indices.is_empty() {
            return Err(BoardError::InvalidShape);
        }
        // iteration is ascending, so the first member is the origin
        let origin = set.iter().next().ok_or(BoardError::InvalidShape)?;
        let (x, y) = (cell_x(origin), cell_y(origin));
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if let Ok(ship) = Ship::new(indices.len(), orientation, x, y) {
                if ship.cells == set {
                    return Ok(ship);
                }
            }
        }
        Err(BoardError::InvalidShape)
    }

    /// Register a hit at `index`. Returns `true` if the cell belongs to this
    /// ship and the hit was counted.
    pub fn register_hit(&mut self, index: usize) -> bool {
        if self.cells.contains(index) && self.hits < self.length {
            self.hits += 1;
            true
        } else {
            false
        }
    }

    /// A ship is sunk exactly when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(index)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Index of the top-left cell.
    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells as a set.
    pub fn cells(&self) -> Cells {
        self.cells
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), orientation: {:?}, length: {}, hits: {} }}",
            cell_x(self.origin),
            cell_y(self.origin),
            self.orientation,
            self.length,
            self.hits,
        )
    }
}
