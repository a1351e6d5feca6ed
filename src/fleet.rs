//! Random placement of a complete fleet.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::board::{can_place_ship, place_ship, Board};
use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIPS};
use crate::ship::{Orientation, Ship, ShipType};

/// Returns a random `(row, col, Orientation)` where `ship_type` fits on `board`.
///
/// Origins are drawn over the whole board and rejected when the ship would
/// run off an edge or overlap.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    ship_type: ShipType,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), GameError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if can_place_ship(board, row, col, ship_type.length(), orientation) {
            return Ok((row, col, orientation));
        }
    }
    warn!("gave up placing the {}", ship_type.name());
    Err(GameError::UnableToPlaceShip)
}

/// Place every roster ship at random, largest first, on a fresh board.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<(Board, Vec<Ship>), GameError> {
    let mut board = Board::new();
    let mut ships = Vec::with_capacity(SHIPS.len());
    for ship_type in SHIPS {
        let (row, col, orientation) = random_placement(&board, ship_type, rng)?;
        let (next, ship) = place_ship(&board, ship_type, row, col, orientation)?;
        debug!("placed {} at {:?}", ship.name(), ship.cells());
        board = next;
        ships.push(ship);
    }
    Ok((board, ships))
}
