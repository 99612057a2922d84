//! Blackhole-Rust: a Black Hole engine with Monte Carlo move selection.
//!
//! ## Usage
//!
//! - `blackhole-rust` - Play a full self-play demo game
//! - `blackhole-rust demo --seed 42` - Same, with a fixed random seed

use anyhow::Result;
use clap::{Parser, Subcommand};

use blackhole_rust::board::{Board, Player};
use blackhole_rust::planner::{evaluate_moves, pick_move};

/// Blackhole-Rust: a Black Hole board game engine
#[derive(Parser)]
#[command(name = "blackhole-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game with both sides driven by the Monte Carlo planner
    Demo {
        /// Seed for the random source, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { seed }) => run_demo(seed),
        None => run_demo(None),
    }
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    println!("Blackhole-Rust: Monte Carlo self-play demo\n");

    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let mut board = Board::new();

    // Show the opening evaluation once, like an engine's candidate dump.
    let candidates = evaluate_moves(&board, &mut rng)?;
    println!("Opening candidates (cell: mean score / playouts):");
    for c in &candidates {
        println!("  {:>2}: {:>3} / {}", c.cell, c.mean_score, c.playouts);
    }
    println!();

    while !board.game_over() {
        let mv = pick_move(&board, &mut rng)?;
        let label = match board.current_player() {
            Player::First => "Player 1",
            Player::Second => "Player 2",
        };
        println!(
            "{label} places {} at cell {mv}",
            board.current_player_value()
        );
        board.set_value(mv)?;
    }

    println!("\nFinal position:\n{board}");
    println!("Black hole score: {}", board.score());
    Ok(())
}
