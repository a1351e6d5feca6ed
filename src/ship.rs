//! Ship definitions, cell geometry and sink detection.

use alloc::vec::Vec;
use core::fmt;

use crate::board::{Board, CellState};
use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Extends to the right of its origin.
    #[default]
    Horizontal,
    /// Extends downwards from its origin.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Cells a ship of `length` would cover starting at (`row`, `col`).
///
/// Coordinates are produced even when they run off the board; callers that
/// care about bounds check them separately. The walk stops early if a
/// coordinate would overflow `usize`, so fewer than `length` cells come back.
pub fn ship_cells(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Coord> {
    (0..length).map_while(move |i| match orientation {
        Orientation::Horizontal => Some((row, col.checked_add(i)?)),
        Orientation::Vertical => Some((row.checked_add(i)?, col)),
    })
}

/// A ship placed on a board.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    name: &'static str,
    length: usize,
    cells: Vec<Coord>,
    sunk: bool,
}

impl Ship {
    /// Record a ship of `ship_type` occupying `cells`, in placement order.
    pub fn new(ship_type: ShipType, cells: Vec<Coord>) -> Self {
        debug_assert_eq!(cells.len(), ship_type.length());
        Ship {
            name: ship_type.name(),
            length: ship_type.length(),
            cells,
            sunk: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupied coordinates, in the order fixed at placement.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cached sink flag, set by the shot resolver.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Whether this ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|&(r, c)| r == row && c == col)
    }

    pub(crate) fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, sunk: {} }}",
            self.name, self.cells, self.sunk
        )
    }
}

/// `true` iff every cell of `ship` is marked `Hit` on `board`.
pub fn check_ship_sunk(ship: &Ship, board: &Board) -> bool {
    ship.cells
        .iter()
        .all(|&(r, c)| board.get(r, c) == Some(CellState::Hit))
}
