//! Hunt/target attack selection for the computer opponent.
//!
//! The strategy keeps its own picture of the target grid, built only from
//! reported outcomes, together with the lengths it believes are still afloat
//! and the confirmed hits whose ship has not been sunk yet. Those pending
//! hits are the anchors of target mode; with none pending the whole grid is
//! searched.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::arrangement::Search;
use crate::board::{CellView, Grid};
use crate::common::{AttackOutcome, CellStatus, Cells, TargetingError};
use crate::config::fleet_lengths;
use crate::density::{density, ProbabilityMap};

/// Search mode of the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No pending hits; every placement is considered.
    Hunt,
    /// At least one pending hit; only placements through a pending hit count.
    Target,
}

/// Probability-driven attacker.
#[derive(Clone, Debug)]
pub struct TargetingStrategy {
    view: Grid,
    remaining: Vec<usize>,
    known_hits: Cells,
    mode: Mode,
    probabilities: ProbabilityMap,
    shots: usize,
}

impl TargetingStrategy {
    /// Strategy against a full standard fleet.
    pub fn new() -> Self {
        Self::with_lengths(&fleet_lengths())
    }

    /// Strategy against a fleet with the given ship lengths.
    pub fn with_lengths(lengths: &[usize]) -> Self {
        TargetingStrategy {
            view: Grid::new(),
            remaining: lengths.to_vec(),
            known_hits: Cells::new(),
            mode: Mode::Hunt,
            probabilities: ProbabilityMap::new(),
            shots: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Confirmed hits on ships not yet known to be sunk.
    pub fn known_hits(&self) -> Cells {
        self.known_hits
    }

    /// Lengths believed to be still afloat.
    pub fn remaining_lengths(&self) -> &[usize] {
        &self.remaining
    }

    /// The strategy's picture of the target grid.
    pub fn view(&self) -> &Grid {
        &self.view
    }

    /// Map computed for the most recent decision.
    pub fn probability_map(&self) -> &ProbabilityMap {
        &self.probabilities
    }

    /// Number of outcomes applied so far.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    fn search(&self) -> Search {
        match self.mode {
            Mode::Hunt => Search::Hunt,
            Mode::Target => Search::Target(self.known_hits),
        }
    }

    /// Recompute the density for the current mode without choosing a cell.
    pub fn recompute_probabilities(&mut self) -> &ProbabilityMap {
        self.probabilities = density(&self.view, &self.remaining, self.search());
        &self.probabilities
    }

    /// Pick the next cell to attack.
    ///
    /// Returns the highest-scoring untouched cell, first in row-major order
    /// on ties, or `NoCandidateCell` once every cell has been attacked.
    pub fn choose_attack_cell(&mut self) -> Result<usize, TargetingError> {
        self.recompute_probabilities();
        let index = self
            .probabilities
            .best_untouched(&self.view)
            .ok_or(TargetingError::NoCandidateCell)?;
        debug!(
            "{:?}: chose cell {} (score {})",
            self.mode,
            index,
            self.probabilities.get(index).unwrap_or(0)
        );
        Ok(index)
    }

    /// Record the outcome of an attack on `index`.
    pub fn apply_outcome(&mut self, index: usize, outcome: AttackOutcome) -> Result<(), TargetingError> {
        match self.view.status(index) {
            None => return Err(TargetingError::IndexOutOfBounds(index)),
            Some(CellStatus::Untouched) => {}
            Some(_) => return Err(TargetingError::AlreadyResolved(index)),
        }
        if let AttackOutcome::Sunk { length, cells } = outcome {
            if !cells.contains(index) || cells.count_ones() != length {
                return Err(TargetingError::InconsistentOutcome(index));
            }
        }
        self.shots += 1;
        match outcome {
            AttackOutcome::Miss => {
                self.mark(index, CellStatus::Miss)?;
            }
            AttackOutcome::Hit => {
                self.mark(index, CellStatus::Hit)?;
                self.known_hits
                    .set(index)
                    .map_err(|_| TargetingError::IndexOutOfBounds(index))?;
                if self.mode == Mode::Hunt {
                    debug!("hit at {}: hunt -> target", index);
                    self.mode = Mode::Target;
                }
            }
            AttackOutcome::Sunk { length, cells } => {
                self.view.mark_sunk(cells);
                // equal lengths are indistinguishable, drop the first match
                match self.remaining.iter().position(|&l| l == length) {
                    Some(pos) => {
                        self.remaining.remove(pos);
                    }
                    None => warn!("sunk ship of length {} was not expected to be afloat", length),
                }
                self.known_hits = self.known_hits & !cells;
                if self.known_hits.is_empty() {
                    if self.mode == Mode::Target {
                        debug!("sunk length {} at {}: target -> hunt", length, index);
                    }
                    self.mode = Mode::Hunt;
                } else {
                    // another ship still has pending hits
                    self.mode = Mode::Target;
                }
            }
        }
        Ok(())
    }

    fn mark(&mut self, index: usize, status: CellStatus) -> Result<(), TargetingError> {
        self.view
            .set(index, status)
            .map_err(|_| TargetingError::IndexOutOfBounds(index))
    }
}

impl Default for TargetingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CellView for TargetingStrategy {
    fn cell_status(&self, index: usize) -> CellStatus {
        self.view.cell_status(index)
    }
}
