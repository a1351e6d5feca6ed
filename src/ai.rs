// Hunt/target opponent: random fire until something is hit, then work
// through the neighbors of every hit until the ship goes down.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{Coord, CoordLabel, ShotResult},
    config::{Difficulty, BOARD_SIZE},
    ship::Ship,
};

/// Targeting mode of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AiMode {
    /// No open lead; fire at random.
    #[default]
    Hunt,
    /// Following up on at least one unresolved hit.
    Target,
}

/// Memory of the computer opponent between shots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiState {
    pub mode: AiMode,
    /// Follow-up candidates, consumed last-in-first-out.
    pub targets: Vec<Coord>,
    /// Hits on ships that are not yet confirmed sunk.
    pub hit_stack: Vec<Coord>,
}

impl AiState {
    /// Fresh state in hunt mode with no leads.
    pub fn new() -> Self {
        Self::default()
    }

    /// State after `result` was observed for a shot at `coord`.
    ///
    /// `ships` is the fleet as it was before the shot and is only consulted
    /// to find the cells of a ship that was just sunk.
    pub fn after_shot(mut self, coord: Coord, result: ShotResult, ships: &[Ship]) -> Self {
        match result {
            ShotResult::Hit => {
                self.mode = AiMode::Target;
                self.hit_stack.push(coord);
                self.targets.extend(adjacent_cells(coord));
            }
            ShotResult::Sunk(name) => {
                if let Some(ship) = ships.iter().find(|s| s.name() == name) {
                    self.hit_stack.retain(|&(r, c)| !ship.contains(r, c));
                }
                // Leftover candidates stay queued while other hits are open.
                if self.hit_stack.is_empty() {
                    self.targets.clear();
                    self.mode = AiMode::Hunt;
                }
            }
            ShotResult::Miss => {}
        }
        self
    }
}

/// In-bounds orthogonal neighbors of `coord`, in up, down, left, right order.
pub fn adjacent_cells((row, col): Coord) -> impl Iterator<Item = Coord> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < BOARD_SIZE).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < BOARD_SIZE).then_some((row, col + 1));
    [up, down, left, right].into_iter().flatten()
}

/// Uniformly random coordinate among the cells of `board` not yet fired upon.
pub fn pick_random_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let available = board.unfired_cells();
    if available.is_empty() {
        return None;
    }
    Some(available[rng.random_range(0..available.len())])
}

/// Choose the next cell to fire at on `board`.
///
/// Returns the coordinate together with the updated state; `state` itself is
/// not modified. `None` means every cell has been fired upon already.
pub fn choose_target<R: Rng + ?Sized>(
    board: &Board,
    state: &AiState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(Coord, AiState)> {
    let mut next = state.clone();

    if difficulty == Difficulty::Easy {
        let coord = pick_random_cell(board, rng)?;
        return Some((coord, next));
    }

    while let Some((r, c)) = next.targets.pop() {
        if board.is_unfired(r, c) {
            debug!("following up at {}", CoordLabel((r, c)));
            return Some(((r, c), next));
        }
    }

    next.mode = AiMode::Hunt;
    let coord = pick_random_cell(board, rng)?;
    debug!("hunting at {}", CoordLabel(coord));
    Some((coord, next))
}
