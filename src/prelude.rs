//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiState, can_place_ship, check_ship_sunk, choose_target, process_shot, random_fleet, Board, CellState,
    Difficulty, GameError, GamePhase, Orientation, Session, ShotResult, Side, BOARD_SIZE, SHIPS,
};

#[cfg(feature = "std")]
pub use crate::cli::{format_board, format_player_view, format_stats, parse_coord};
