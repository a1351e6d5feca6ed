//! Common types for the engine: coordinates, shot results and errors.

use core::fmt;

use crate::config::{col_label, row_label, BOARD_SIZE};
use crate::game::GamePhase;

/// Grid coordinate as `(row, col)`, both zero-based.
pub type Coord = (usize, usize);

/// Human-readable label for a coordinate, column letter first (e.g. `C4`).
/// Off-board coordinates print as raw indices, e.g. `(0, 200)`.
pub struct CoordLabel(pub Coord);

impl fmt::Display for CoordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.0;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return write!(f, "({}, {})", row, col);
        }
        write!(f, "{}{}", col_label(col), row_label(row))
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotResult {
    /// `true` for both hits and sinking hits.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by engine and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    InvalidIndex { row: usize, col: usize },
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// A ship cell was struck but no ship in the fleet owns it.
    UnknownShip { row: usize, col: usize },
    /// The cell was already fired upon.
    AlreadyFired { row: usize, col: usize },
    /// Operation is not allowed in the current phase.
    WrongPhase { expected: GamePhase, actual: GamePhase },
    /// The computer has not answered the last shot yet.
    ComputerTurnPending,
    /// The computer was asked to fire out of turn.
    NotComputerTurn,
    /// Every cell of the target board has already been fired upon.
    NoTargetsLeft,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::UnknownShip { row, col } => {
                write!(f, "No ship occupies {}", CoordLabel((*row, *col)))
            }
            GameError::AlreadyFired { row, col } => {
                write!(f, "{} was already fired upon", CoordLabel((*row, *col)))
            }
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected {:?} phase, game is in {:?}", expected, actual)
            }
            GameError::ComputerTurnPending => write!(f, "Waiting for the computer to fire"),
            GameError::NotComputerTurn => write!(f, "It is not the computer's turn"),
            GameError::NoTargetsLeft => write!(f, "No unfired cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
