//! Enumeration of candidate ship placements consistent with a target grid.
//!
//! An [`Arrangement`] is a straight, contiguous run of cells that lies fully
//! on the grid and touches no `Miss` or `SunkMember` cell. Confirmed hits do
//! not block a placement: a ship may already have several of its cells hit.

use alloc::vec::Vec;

use log::{trace, warn};

use crate::board::CellView;
use crate::common::{cell_index, cell_x, cell_y, Cells};
use crate::config::{is_fleet_length, GRID_SIZE};

/// One candidate placement, cells listed from the first to the last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    cells: Vec<usize>,
}

impl Arrangement {
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Which part of the placement space to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    /// Every placement on the grid.
    Hunt,
    /// Only placements passing through at least one of the anchor cells.
    Target(Cells),
}

/// Axis direction a candidate ship extends in from its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Enumerate every valid arrangement of a ship of `length` for `search`.
///
/// Lengths that are not part of the fleet yield no arrangements.
///
/// In target mode each anchor contributes, for each of the four directions
/// and each offset of the anchor within the ship, the run that holds the
/// anchor at that offset. A placement is therefore produced once per
/// direction along its axis and once per anchor it covers.
pub fn enumerate<V: CellView + ?Sized>(view: &V, length: usize, search: Search) -> Vec<Arrangement> {
    if !is_fleet_length(length) {
        warn!("enumerate: length {} is not a fleet length", length);
        return Vec::new();
    }
    let arrangements = match search {
        Search::Hunt => hunt(view, length),
        Search::Target(anchors) => target(view, length, anchors),
    };
    trace!("enumerate: {} arrangements of length {} ({:?})", arrangements.len(), length, search);
    arrangements
}

fn hunt<V: CellView + ?Sized>(view: &V, length: usize) -> Vec<Arrangement> {
    let mut out = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..=GRID_SIZE - length {
            out.extend(run(view, x, y, Direction::Right, length));
        }
    }
    for x in 0..GRID_SIZE {
        for y in 0..=GRID_SIZE - length {
            out.extend(run(view, x, y, Direction::Down, length));
        }
    }
    out
}

fn target<V: CellView + ?Sized>(view: &V, length: usize, anchors: Cells) -> Vec<Arrangement> {
    let mut out = Vec::new();
    for anchor in anchors.iter() {
        let (ax, ay) = (cell_x(anchor) as isize, cell_y(anchor) as isize);
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            for i in 0..length as isize {
                // step back `i` cells so the anchor sits at offset `i`
                let (sx, sy) = (ax - dx * i, ay - dy * i);
                if !on_grid(sx, sy) {
                    continue;
                }
                out.extend(run(view, sx as usize, sy as usize, dir, length));
            }
        }
    }
    out
}

#[inline]
fn on_grid(x: isize, y: isize) -> bool {
    (0..GRID_SIZE as isize).contains(&x) && (0..GRID_SIZE as isize).contains(&y)
}

/// The run of `length` cells from (`x`, `y`) in `dir`, if it stays on the grid
/// and avoids every blocked cell.
fn run<V: CellView + ?Sized>(view: &V, x: usize, y: usize, dir: Direction, length: usize) -> Option<Arrangement> {
    let (dx, dy) = dir.delta();
    let mut cells = Vec::with_capacity(length);
    for k in 0..length as isize {
        let (cx, cy) = (x as isize + dx * k, y as isize + dy * k);
        if !on_grid(cx, cy) {
            return None;
        }
        let index = cell_index(cx as usize, cy as usize);
        if view.cell_status(index).blocks_placement() {
            return None;
        }
        cells.push(index);
    }
    Some(Arrangement { cells })
}

