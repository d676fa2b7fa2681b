//! Probability density over the target grid.
//!
//! A cell's score is the number of still-consistent arrangements, summed over
//! every remaining ship length, that cover it. The computation is pure: the
//! same grid and inputs always produce the same map.

use core::fmt;

use crate::arrangement::{enumerate, Search};
use crate::board::CellView;
use crate::common::CellStatus;
use crate::config::{CELL_COUNT, GRID_SIZE};

/// Per-cell arrangement counts, indexed like the grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityMap {
    scores: [u32; CELL_COUNT],
}

impl ProbabilityMap {
    /// An all-zero map.
    pub fn new() -> Self {
        ProbabilityMap {
            scores: [0; CELL_COUNT],
        }
    }

    /// Score of `index`, or `None` off the grid.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.scores.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    /// Highest score on the map.
    pub fn max(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|&s| s == 0)
    }

    /// Highest-scoring `Untouched` cell of `view`.
    ///
    /// Ties go to the first cell in row-major order. Untouched cells are
    /// eligible even with a zero score; `None` means nothing is untouched.
    pub fn best_untouched<V: CellView + ?Sized>(&self, view: &V) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, &score) in self.scores.iter().enumerate() {
            if view.cell_status(index) != CellStatus::Untouched {
                continue;
            }
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Scores scaled into `0.0..=1.0` relative to the maximum.
    pub fn normalized(&self) -> [f64; CELL_COUNT] {
        let max = self.max();
        let mut out = [0.0f64; CELL_COUNT];
        if max == 0 {
            return out;
        }
        for (o, &s) in out.iter_mut().zip(self.scores.iter()) {
            *o = s as f64 / max as f64;
        }
        out
    }
}

impl Default for ProbabilityMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.scores.chunks(GRID_SIZE) {
            for score in row {
                write!(f, "{:4}", score)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProbabilityMap:")?;
        fmt::Display::fmt(self, f)
    }
}

/// Aggregate arrangement coverage for every length in `remaining_lengths`.
///
/// Returns an all-zero map when no lengths remain.
pub fn density<V: CellView + ?Sized>(view: &V, remaining_lengths: &[usize], search: Search) -> ProbabilityMap {
    let mut map = ProbabilityMap::new();
    for &length in remaining_lengths {
        for arrangement in enumerate(view, length, search) {
            for &index in arrangement.cells() {
                map.scores[index] += 1;
            }
        }
    }
    map
}

