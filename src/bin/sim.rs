#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::prelude::*;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Play one game with the human side driven by the targeting engine and
/// print a JSON summary.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    /// Seed for the session (computer fleet and computer shots).
    seed: u64,
    /// Seed for the simulated player's shots.
    player_seed: u64,
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args = Args::parse();

    let mut session = Session::new(args.difficulty, SmallRng::seed_from_u64(args.seed));
    let mut player_rng = SmallRng::seed_from_u64(args.player_seed);
    let mut player_ai = AiState::new();

    session.place_randomly().map_err(|e| anyhow::anyhow!(e))?;

    while session.phase() == GamePhase::Battle {
        let (coord, next) = choose_target(
            session.computer_board(),
            &player_ai,
            Difficulty::Normal,
            &mut player_rng,
        )
        .ok_or_else(|| anyhow::anyhow!("player ran out of targets"))?;
        let report = session.fire(coord.0, coord.1).map_err(|e| anyhow::anyhow!(e))?;
        player_ai = next.after_shot(coord, report.result, session.computer_ships());

        if session.awaiting_computer() {
            session.computer_turn().map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    let winner = match session.winner() {
        Some(Side::Player) => Some("player"),
        Some(Side::Computer) => Some("computer"),
        None => None,
    };
    let result = json!({
        "difficulty": session.difficulty(),
        "winner": winner,
        "stats": session.stats(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
