use core::time::Duration;

use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on random origin/orientation draws per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Pause between the player's shot and the computer's reply.
pub const COMPUTER_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Opponent strength, chosen before placement and fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Fires at random unfired cells only.
    Easy,
    /// Hunts randomly, then works the neighbors of every hit.
    #[default]
    Normal,
}

/// Row label as shown to players: row index 0 is "1".
pub fn row_label(row: usize) -> usize {
    row.saturating_add(1)
}

/// Column label as shown to players: column index 0 is 'A'. Columns past
/// 'Z' have no letter and map to '?'.
pub fn col_label(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .filter(|&c| c < 26)
        .map_or('?', |c| char::from(b'A' + c))
}
