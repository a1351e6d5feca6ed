#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the interactive game.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, CellState},
    common::Coord,
    config::{col_label, row_label, BOARD_SIZE},
    game::{GamePhase, Session, Side},
    stats::Stats,
};
use rand::Rng;

/// Parse a label such as `B7` or `j10` into `(row, col)`.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

fn cell_char(cell: CellState, reveal: bool) -> char {
    match cell {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
        CellState::Ship if reveal => 'S',
        CellState::Ship | CellState::Empty => '.',
    }
}

/// Render a board with column letters across the top and row numbers down
/// the side. Ships are only drawn when `reveal` is set.
pub fn format_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", col_label(c));
    }
    out.push('\n');
    for (r, row) in board.rows().iter().enumerate() {
        let _ = write!(out, "{:2} ", row_label(r));
        for &cell in row.iter() {
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// Side-by-side recap of both players' statistics.
pub fn format_stats(stats: &Stats, winner: Option<Side>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12}{:>8}{:>10}", "", "You", "Computer");
    let rows = [
        ("Shots", stats.player.shots, stats.computer.shots),
        ("Hits", stats.player.hits, stats.computer.hits),
        ("Misses", stats.player.misses, stats.computer.misses),
        ("Ships sunk", stats.player.ships_sunk, stats.computer.ships_sunk),
    ];
    for (label, you, them) in rows {
        let _ = writeln!(out, "{:<12}{:>8}{:>10}", label, you, them);
    }
    let _ = writeln!(
        out,
        "{:<12}{:>7.1}%{:>9.1}%",
        "Accuracy",
        stats.player.accuracy(),
        stats.computer.accuracy()
    );
    let _ = writeln!(out, "{:<12}{:>8}", "Turns", stats.turns);
    match winner {
        Some(Side::Player) => out.push_str("Victory!\n"),
        Some(Side::Computer) => out.push_str("Defeat\n"),
        None => {}
    }
    out
}

/// Both boards as seen by the human: the computer's waters on top, own
/// fleet below. The computer's ships are revealed once the game is over.
pub fn format_player_view<R: Rng>(session: &Session<R>) -> String {
    let reveal = session.phase() == GamePhase::GameOver;
    let mut out = String::from("Computer waters:\n");
    out.push_str(&format_board(session.computer_board(), reveal));
    out.push_str("\nYour fleet:\n");
    out.push_str(&format_board(session.player_board(), true));
    out
}
