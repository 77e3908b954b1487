//! Beastline: a 5x5 placement-and-movement strategy game with a minimax AI.
//!
//! ## Usage
//!
//! - `beastline shell` - Start the interactive command shell
//! - `beastline demo` - Watch the AI play itself
//!
//! Both accept `--difficulty <easy|medium|hard>` and `--seed <n>`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use beastline::board::{Board, GamePhase, Player};
use beastline::search::{Difficulty, Searcher};
use beastline::shell::Shell;

/// Beastline: 5x5 strategy game with a minimax engine
#[derive(Parser)]
#[command(name = "beastline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// AI strength (maps to search depth)
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Seed for the AI's tie-breaking randomness; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command shell
    Shell,
    /// Play a full AI-vs-AI game and print the result
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    info!(difficulty = cli.difficulty.name(), seed, "starting");

    match cli.command {
        Some(Commands::Shell) => Shell::new(cli.difficulty, seed).run(),
        Some(Commands::Demo) | None => run_demo(cli.difficulty, seed),
    }
}

/// Play one AI-vs-AI game to completion (or a turn cap) and print it.
fn run_demo(difficulty: Difficulty, seed: u64) -> Result<()> {
    let mut board = Board::new();
    let mut ai = Searcher::new(difficulty, seed);

    // Placement: five pieces each.
    while board.phase() == GamePhase::Placement {
        ai.run_ai_turn(&mut board);
    }
    println!("After placement:\n{board}");

    let mut turns = 0;
    while board.phase() == GamePhase::Movement && turns < 200 {
        ai.run_ai_turn(&mut board);
        turns += 1;
    }

    println!("After {turns} movement turns:\n{board}");
    match board.winner() {
        Player::None => println!("No winner within the turn cap."),
        winner => println!("Winner: {winner}"),
    }
    Ok(())
}
