//! Session controller: placement, turn order, win detection and statistics.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    ai::{choose_target, AiState},
    board::{can_place_ship, place_ship, Board},
    common::{Coord, CoordLabel, GameError, ShotResult},
    config::{Difficulty, BOARD_SIZE, SHIPS},
    fleet::random_fleet,
    ship::{ship_cells, Orientation, Ship, ShipType},
    shot::{all_ships_sunk, process_shot},
    stats::Stats,
};

/// Phase of a session. Only moves forward; `reset` starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GamePhase {
    Placement,
    Battle,
    GameOver,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Cells the next ship would cover at a hovered coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// In-bounds cells only.
    pub cells: Vec<Coord>,
    pub valid: bool,
}

/// A resolved shot, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub side: Side,
    pub coord: Coord,
    pub result: ShotResult,
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = CoordLabel(self.coord);
        match (self.side, self.result) {
            (Side::Player, ShotResult::Miss) => write!(f, "Miss at {}.", at),
            (Side::Player, ShotResult::Hit) => write!(f, "Hit at {}!", at),
            (Side::Player, ShotResult::Sunk(name)) => write!(f, "You sank the computer's {}!", name),
            (Side::Computer, ShotResult::Miss) => write!(f, "Computer missed at {}.", at),
            (Side::Computer, ShotResult::Hit) => write!(f, "Computer hit at {}!", at),
            (Side::Computer, ShotResult::Sunk(name)) => write!(f, "Computer sank your {}!", name),
        }
    }
}

/// A single human-versus-computer game.
///
/// Every change happens through `&mut self` in response to one discrete
/// input, so there is never more than one mutation in flight. After the
/// player fires, the session waits for [`Session::computer_turn`] and rejects
/// further player shots until then.
pub struct Session<R: Rng> {
    rng: R,
    difficulty: Difficulty,
    phase: GamePhase,
    orientation: Orientation,
    player_board: Board,
    player_ships: Vec<Ship>,
    computer_board: Board,
    computer_ships: Vec<Ship>,
    ai: AiState,
    stats: Stats,
    awaiting_reply: bool,
    winner: Option<Side>,
}

impl<R: Rng> Session<R> {
    /// New session in the placement phase. All random choices draw from `rng`.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self {
            rng,
            difficulty,
            phase: GamePhase::Placement,
            orientation: Orientation::Horizontal,
            player_board: Board::new(),
            player_ships: Vec::new(),
            computer_board: Board::new(),
            computer_ships: Vec::new(),
            ai: AiState::new(),
            stats: Stats::new(),
            awaiting_reply: false,
            winner: None,
        }
    }

    /// Throw away all game state and return to placement. Difficulty and
    /// the random source carry over.
    pub fn reset(&mut self) {
        info!("session reset");
        self.phase = GamePhase::Placement;
        self.orientation = Orientation::Horizontal;
        self.player_board = Board::new();
        self.player_ships.clear();
        self.computer_board = Board::new();
        self.computer_ships.clear();
        self.ai = AiState::new();
        self.stats = Stats::new();
        self.awaiting_reply = false;
        self.winner = None;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Orientation used for the next manual placement.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn player_ships(&self) -> &[Ship] {
        &self.player_ships
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn computer_ships(&self) -> &[Ship] {
        &self.computer_ships
    }

    pub fn ai_state(&self) -> &AiState {
        &self.ai
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// `true` while a player shot is waiting for the computer's reply.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_reply
    }

    /// Whether the player may fire right now.
    pub fn is_player_turn(&self) -> bool {
        self.phase == GamePhase::Battle && !self.awaiting_reply
    }

    /// Roster entry waiting to be placed, if still in placement.
    pub fn next_ship(&self) -> Option<ShipType> {
        if self.phase != GamePhase::Placement {
            return None;
        }
        SHIPS.get(self.player_ships.len()).copied()
    }

    /// Flip the placement orientation and return the new one.
    pub fn rotate(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// Cells the next ship would occupy at (`row`, `col`) and whether it fits.
    pub fn preview(&self, row: usize, col: usize) -> Option<Preview> {
        let ship = self.next_ship()?;
        let cells = ship_cells(row, col, ship.length(), self.orientation)
            .filter(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
            .collect();
        let valid = can_place_ship(&self.player_board, row, col, ship.length(), self.orientation);
        Some(Preview { cells, valid })
    }

    /// Place the next roster ship at (`row`, `col`) in the current orientation.
    ///
    /// Returns the ship to place after this one, or `None` once the fleet is
    /// complete and the battle has started.
    pub fn place_next_ship(&mut self, row: usize, col: usize) -> Result<Option<ShipType>, GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let ship_type = self.next_ship().ok_or(GameError::WrongPhase {
            expected: GamePhase::Placement,
            actual: self.phase,
        })?;
        let (board, ship) = place_ship(&self.player_board, ship_type, row, col, self.orientation)
            .inspect_err(|e| warn!("rejected {} at {}: {}", ship_type.name(), CoordLabel((row, col)), e))?;

        if self.player_ships.len() + 1 == SHIPS.len() {
            // Build the computer fleet first so a failure leaves placement intact.
            let computer = random_fleet(&mut self.rng)?;
            self.commit_player_ship(board, ship);
            self.start_battle(computer);
            return Ok(None);
        }
        self.commit_player_ship(board, ship);
        Ok(self.next_ship())
    }

    /// Replace any manual placement with a random fleet and start the battle.
    pub fn place_randomly(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let (board, ships) = random_fleet(&mut self.rng)?;
        let computer = random_fleet(&mut self.rng)?;
        self.player_board = board;
        self.player_ships = ships;
        self.start_battle(computer);
        Ok(())
    }

    /// Fire at (`row`, `col`) on the computer's board.
    ///
    /// On success the session waits for [`Session::computer_turn`] unless
    /// the shot won the game.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        self.expect_phase(GamePhase::Battle)?;
        if self.awaiting_reply {
            warn!("shot at {} ignored, computer to move", CoordLabel((row, col)));
            return Err(GameError::ComputerTurnPending);
        }
        let cell = self
            .computer_board
            .get(row, col)
            .ok_or(GameError::InvalidIndex { row, col })?;
        if !cell.is_unfired() {
            return Err(GameError::AlreadyFired { row, col });
        }

        let outcome = process_shot(&self.computer_board, &self.computer_ships, row, col)?;
        self.computer_board = outcome.board;
        self.computer_ships = outcome.ships;
        let report = self.record(Side::Player, (row, col), outcome.result);

        if all_ships_sunk(&self.computer_ships) {
            self.finish(Side::Player);
        } else {
            self.awaiting_reply = true;
        }
        Ok(report)
    }

    /// Let the computer answer the player's last shot.
    pub fn computer_turn(&mut self) -> Result<ShotReport, GameError> {
        self.expect_phase(GamePhase::Battle)?;
        if !self.awaiting_reply {
            return Err(GameError::NotComputerTurn);
        }
        let (coord, ai) = choose_target(&self.player_board, &self.ai, self.difficulty, &mut self.rng)
            .ok_or(GameError::NoTargetsLeft)?;
        let (row, col) = coord;

        let outcome = process_shot(&self.player_board, &self.player_ships, row, col)?;
        self.ai = ai.after_shot(coord, outcome.result, &self.player_ships);
        self.player_board = outcome.board;
        self.player_ships = outcome.ships;
        let report = self.record(Side::Computer, coord, outcome.result);
        debug!("computer now in {:?} mode with {} candidates", self.ai.mode, self.ai.targets.len());

        self.awaiting_reply = false;
        if all_ships_sunk(&self.player_ships) {
            self.finish(Side::Computer);
        }
        Ok(report)
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn commit_player_ship(&mut self, board: Board, ship: Ship) {
        debug!("player placed {} at {:?}", ship.name(), ship.cells());
        self.player_board = board;
        self.player_ships.push(ship);
    }

    fn start_battle(&mut self, (board, ships): (Board, Vec<Ship>)) {
        self.computer_board = board;
        self.computer_ships = ships;
        self.phase = GamePhase::Battle;
        info!("all ships placed, battle begins ({:?})", self.difficulty);
    }

    fn record(&mut self, side: Side, coord: Coord, result: ShotResult) -> ShotReport {
        self.stats.record(side, result);
        let report = ShotReport { side, coord, result };
        debug!("{:?}: {}", side, report);
        report
    }

    fn finish(&mut self, winner: Side) {
        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        self.awaiting_reply = false;
        info!("game over, {:?} wins after {} turns", winner, self.stats.turns);
    }
}
