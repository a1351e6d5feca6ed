//! Per-side shot statistics.

use crate::common::ShotResult;
use crate::game::Side;

/// Counters for one side's shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideStats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub ships_sunk: u32,
}

impl SideStats {
    fn record(&mut self, result: ShotResult) {
        self.shots += 1;
        match result {
            ShotResult::Miss => self.misses += 1,
            ShotResult::Hit => self.hits += 1,
            ShotResult::Sunk(_) => {
                self.hits += 1;
                self.ships_sunk += 1;
            }
        }
    }

    /// Hits as a percentage of shots, `0.0` before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            f64::from(self.hits) * 100.0 / f64::from(self.shots)
        }
    }
}

/// Statistics for a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Stats {
    pub player: SideStats,
    pub computer: SideStats,
    /// Counted once per player shot.
    pub turns: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a shot fired by `side`.
    pub fn record(&mut self, side: Side, result: ShotResult) {
        match side {
            Side::Player => {
                self.player.record(result);
                self.turns += 1;
            }
            Side::Computer => self.computer.record(result),
        }
    }

    pub fn side(&self, side: Side) -> &SideStats {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }
}
