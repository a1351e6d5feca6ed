//! Shot resolution against a board and its fleet.

use alloc::vec::Vec;

use log::debug;

use crate::board::{Board, CellState};
use crate::common::{CoordLabel, GameError, ShotResult};
use crate::ship::{check_ship_sunk, Ship};

/// New board and fleet after a shot, with the result of that shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotOutcome {
    pub board: Board,
    pub ships: Vec<Ship>,
    pub result: ShotResult,
}

impl ShotOutcome {
    /// Name of the ship sunk by this shot, if any.
    pub fn sunk_ship_name(&self) -> Option<&'static str> {
        match self.result {
            ShotResult::Sunk(name) => Some(name),
            _ => None,
        }
    }
}

/// Fire at (`row`, `col`) on `board`, whose ships are `ships`.
///
/// Neither input is modified. Any cell other than `Ship` becomes `Miss`;
/// filtering out cells that were already fired upon is the caller's job.
pub fn process_shot(
    board: &Board,
    ships: &[Ship],
    row: usize,
    col: usize,
) -> Result<ShotOutcome, GameError> {
    let target = board
        .get(row, col)
        .ok_or(GameError::InvalidIndex { row, col })?;
    let mut ships = ships.to_vec();

    if target != CellState::Ship {
        let board = board.with_cell(row, col, CellState::Miss)?;
        debug!("shot at {} missed", CoordLabel((row, col)));
        return Ok(ShotOutcome {
            board,
            ships,
            result: ShotResult::Miss,
        });
    }

    let mut board = board.with_cell(row, col, CellState::Hit)?;
    let ship = ships
        .iter_mut()
        .find(|s| s.contains(row, col))
        .ok_or(GameError::UnknownShip { row, col })?;

    if !check_ship_sunk(ship, &board) {
        debug!("shot at {} hit the {}", CoordLabel((row, col)), ship.name());
        return Ok(ShotOutcome {
            board,
            ships,
            result: ShotResult::Hit,
        });
    }

    ship.mark_sunk();
    for &(r, c) in ship.cells() {
        board = board.with_cell(r, c, CellState::Sunk)?;
    }
    let name = ship.name();
    debug!("shot at {} sank the {}", CoordLabel((row, col)), name);
    Ok(ShotOutcome {
        board,
        ships,
        result: ShotResult::Sunk(name),
    })
}

/// Returns `true` when the fleet is non-empty and every ship is sunk.
pub fn all_ships_sunk(ships: &[Ship]) -> bool {
    !ships.is_empty() && ships.iter().all(Ship::is_sunk)
}
