#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use broadside::{
    cli::{format_board, format_player_view, format_stats, parse_coord},
    init_logging, Difficulty, GamePhase, Session, COMPUTER_REPLY_DELAY,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Pause before the computer fires, in milliseconds")]
        delay_ms: Option<u64>,
        #[arg(long, help = "Place your fleet at random instead of ship by ship")]
        random: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            delay_ms,
            random,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or(COMPUTER_REPLY_DELAY);
            let session = Session::new(difficulty, rng);
            run_game(session, delay, random).await?;
        }
    }
    Ok(())
}

/// Read one trimmed line from stdin; `None` on end of input.
#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(feature = "std")]
async fn run_game(
    mut session: Session<SmallRng>,
    delay: Duration,
    random: bool,
) -> anyhow::Result<()> {
    if random {
        session.place_randomly().map_err(|e| anyhow::anyhow!(e))?;
    }

    loop {
        match session.phase() {
            GamePhase::Placement => {
                let Some(ship) = session.next_ship() else {
                    break;
                };
                println!("\n{}", format_board(session.player_board(), true));
                let text = format!(
                    "Place your {} ({} cells, {:?}). Enter a cell like A5, 'r' to rotate, 'random' for all: ",
                    ship.name(),
                    ship.length(),
                    session.orientation()
                );
                let Some(line) = prompt(&text)? else {
                    break;
                };
                match line.to_ascii_lowercase().as_str() {
                    "r" => {
                        session.rotate();
                    }
                    "random" => session.place_randomly().map_err(|e| anyhow::anyhow!(e))?,
                    "q" | "quit" => break,
                    other => match parse_coord(other) {
                        Some((r, c)) => {
                            if let Err(e) = session.place_next_ship(r, c) {
                                println!("Error: {}", e);
                            } else if session.phase() == GamePhase::Battle {
                                println!("All ships placed! Fire at the computer's waters.");
                            }
                        }
                        None => println!("Invalid input"),
                    },
                }
            }
            GamePhase::Battle => {
                println!("\n{}", format_player_view(&session));
                let Some(line) = prompt("Your turn, fire at: ")? else {
                    break;
                };
                if matches!(line.as_str(), "q" | "quit") {
                    break;
                }
                let Some((r, c)) = parse_coord(&line) else {
                    println!("Invalid coordinate");
                    continue;
                };
                match session.fire(r, c) {
                    Ok(report) => println!("{}", report),
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                }
                if session.awaiting_computer() {
                    println!("Computer is thinking...");
                    tokio::time::sleep(delay).await;
                    let report = session.computer_turn().map_err(|e| anyhow::anyhow!(e))?;
                    println!("{}", report);
                }
            }
            GamePhase::GameOver => {
                println!("\n{}", format_player_view(&session));
                println!("{}", format_stats(session.stats(), session.winner()));
                let Some(line) = prompt("Type 'new' to play again, anything else quits: ")? else {
                    break;
                };
                if line != "new" {
                    break;
                }
                session.reset();
                if random {
                    session.place_randomly().map_err(|e| anyhow::anyhow!(e))?;
                }
            }
        }
    }
    Ok(())
}
