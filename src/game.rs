//! Two-sided game between a human and the computer opponent.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, TargetingError};
use crate::targeting::TargetingStrategy;

/// Phase of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The human is still placing ships.
    Placement,
    Battle,
    Over,
}

/// Whose attack is next during battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Human,
    Computer,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
}

/// Errors returned by [`GameState`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotPlacementPhase,
    NotBattlePhase,
    NotYourTurn,
    GameOver,
    Board(BoardError),
    Targeting(TargetingError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<TargetingError> for GameError {
    fn from(err: TargetingError) -> Self {
        GameError::Targeting(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotPlacementPhase => write!(f, "Ships can only be placed before battle"),
            GameError::NotBattlePhase => write!(f, "Place all ships before attacking"),
            GameError::NotYourTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is over"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Targeting(e) => write!(f, "Targeting error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Complete state of one game: both fleets, the computer's targeting, and
/// turn order.
#[derive(Clone, Debug)]
pub struct GameState {
    human: Board,
    computer: Board,
    strategy: TargetingStrategy,
    phase: Phase,
    turn: Turn,
    status: GameStatus,
}

impl GameState {
    /// Start a game with the computer fleet placed randomly.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut computer = Board::new();
        computer.place_fleet_randomly(rng)?;
        Ok(GameState {
            human: Board::new(),
            computer,
            strategy: TargetingStrategy::new(),
            phase: Phase::Placement,
            turn: Turn::Human,
            status: GameStatus::InProgress,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The human's fleet and the computer's attacks on it.
    pub fn human_board(&self) -> &Board {
        &self.human
    }

    /// The computer's fleet and the human's attacks on it.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    pub fn strategy(&self) -> &TargetingStrategy {
        &self.strategy
    }

    /// Place one human ship on the given cells. Battle begins once the whole
    /// fleet is placed.
    pub fn place_human_ship(&mut self, cells: &[usize]) -> Result<usize, GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotPlacementPhase);
        }
        let id = self.human.place_cells(cells)?;
        if self.human.is_fully_placed() {
            info!("all ships placed, battle begins");
            self.phase = Phase::Battle;
        }
        Ok(id)
    }

    /// Place every remaining human ship at random.
    pub fn place_human_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotPlacementPhase);
        }
        self.human.place_fleet_randomly(rng)?;
        self.phase = Phase::Battle;
        Ok(())
    }

    fn check_turn(&self, side: Turn) -> Result<(), GameError> {
        match self.phase {
            Phase::Placement => Err(GameError::NotBattlePhase),
            Phase::Over => Err(GameError::GameOver),
            Phase::Battle if self.turn != side => Err(GameError::NotYourTurn),
            Phase::Battle => Ok(()),
        }
    }

    /// Resolve a human attack on the computer's grid.
    pub fn human_attack(&mut self, index: usize) -> Result<AttackOutcome, GameError> {
        self.check_turn(Turn::Human)?;
        let outcome = self.computer.attack(index)?;
        debug!("human attacks {}: {:?}", index, outcome);
        if self.computer.fleet_sunk() {
            self.finish(GameStatus::HumanWon);
        } else {
            self.turn = Turn::Computer;
        }
        Ok(outcome)
    }

    /// Let the computer choose and resolve its attack on the human's grid.
    pub fn computer_turn(&mut self) -> Result<(usize, AttackOutcome), GameError> {
        self.check_turn(Turn::Computer)?;
        let index = self.strategy.choose_attack_cell()?;
        let outcome = self.human.attack(index)?;
        self.strategy.apply_outcome(index, outcome)?;
        debug!("computer attacks {}: {:?}", index, outcome);
        if self.human.fleet_sunk() {
            self.finish(GameStatus::ComputerWon);
        } else {
            self.turn = Turn::Human;
        }
        Ok((index, outcome))
    }

    fn finish(&mut self, status: GameStatus) {
        info!("game over: {:?}", status);
        self.status = status;
        self.phase = Phase::Over;
    }
}
