#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{init_logging, Board, GameState, GameStatus, TargetingStrategy, CELL_COUNT};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

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
    /// Let the targeting engine sink randomly placed fleets and report shot counts.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100)]
        games: u32,
    },
    /// Play a full game where the human side is also driven by the engine.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Shots the engine needs to sink a randomly placed fleet.
#[cfg(feature = "std")]
fn solve(rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut board = Board::new();
    board
        .place_fleet_randomly(rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut strategy = TargetingStrategy::new();
    while !board.fleet_sunk() {
        if strategy.shots_fired() >= CELL_COUNT {
            anyhow::bail!("fleet still afloat after {} shots", CELL_COUNT);
        }
        let index = strategy.choose_attack_cell()?;
        let outcome = board.attack(index)?;
        strategy.apply_outcome(index, outcome)?;
    }
    Ok(strategy.shots_fired())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, games } => {
            if let Some(s) = seed {
                info!("using fixed seed {}", s);
            }
            let mut rng = make_rng(seed);
            let mut shots = Vec::with_capacity(games as usize);
            for game in 0..games {
                let n = solve(&mut rng)?;
                info!("game {}: fleet sunk in {} shots", game + 1, n);
                shots.push(n);
            }
            let min = shots.iter().copied().min();
            let max = shots.iter().copied().max();
            let mean = if shots.is_empty() {
                None
            } else {
                Some(shots.iter().sum::<usize>() as f64 / shots.len() as f64)
            };
            let result = json!({
                "games": games,
                "shots": shots,
                "min": min,
                "max": max,
                "mean": mean,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Duel { seed } => {
            let mut rng = make_rng(seed);
            let mut game = GameState::new(&mut rng)?;
            game.place_human_fleet_randomly(&mut rng)?;
            let mut stand_in = TargetingStrategy::new();
            while game.status() == GameStatus::InProgress {
                let index = stand_in.choose_attack_cell()?;
                let outcome = game.human_attack(index)?;
                stand_in.apply_outcome(index, outcome)?;
                if game.status() != GameStatus::InProgress {
                    break;
                }
                game.computer_turn()?;
            }
            let result = json!({
                "winner": game.status(),
                "human_shots": stand_in.shots_fired(),
                "computer_shots": game.strategy().shots_fired(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}
