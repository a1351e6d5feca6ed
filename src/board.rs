//! Board grid, placement validation and the placement step.
//!
//! `Board` is a plain `Copy` value: every update produces a new board and a
//! caller holding an older copy never observes the change.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coord, GameError};
use crate::config::BOARD_SIZE;
use crate::ship::{ship_cells, Orientation, Ship, ShipType};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Not yet fired upon (`Empty` or `Ship`).
    pub fn is_unfired(self) -> bool {
        matches!(self, CellState::Empty | CellState::Ship)
    }
}

/// A `BOARD_SIZE`×`BOARD_SIZE` grid of cell states.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (`row`, `col`), or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Copy of this board with (`row`, `col`) set to `state`.
    pub fn with_cell(mut self, row: usize, col: usize, state: CellState) -> Result<Self, GameError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GameError::InvalidIndex { row, col })?;
        *cell = state;
        Ok(self)
    }

    /// Whether (`row`, `col`) is on the board and not yet fired upon.
    pub fn is_unfired(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(CellState::is_unfired)
    }

    /// All coordinates not yet fired upon, in row-major order.
    pub fn unfired_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, state)| state.is_unfired())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|(_, s)| *s == state).count()
    }

    /// Iterator over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &state)| ((r, c), state))
        })
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                    CellState::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fresh empty board.
pub fn create_empty_board() -> Board {
    Board::new()
}

/// Whether a ship of `length` fits at (`row`, `col`) without leaving the
/// board or touching a non-empty cell.
pub fn can_place_ship(
    board: &Board,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    let mut seen = 0;
    ship_cells(row, col, length, orientation).all(|(r, c)| {
        seen += 1;
        board.get(r, c) == Some(CellState::Empty)
    }) && seen == length
}

/// Place `ship_type` at (`row`, `col`), returning the updated board and the
/// recorded ship. The input board is left untouched.
pub fn place_ship(
    board: &Board,
    ship_type: ShipType,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Result<(Board, Ship), GameError> {
    let cells: Vec<Coord> = ship_cells(row, col, ship_type.length(), orientation).collect();
    let off_board = cells.iter().any(|&(r, c)| r >= BOARD_SIZE || c >= BOARD_SIZE);
    if off_board || cells.len() != ship_type.length() {
        return Err(GameError::ShipOutOfBounds);
    }
    if !can_place_ship(board, row, col, ship_type.length(), orientation) {
        return Err(GameError::ShipOverlaps);
    }
    let mut next = *board;
    for &(r, c) in &cells {
        next = next.with_cell(r, c, CellState::Ship)?;
    }
    Ok((next, Ship::new(ship_type, cells)))
}
