//! Blackhole-Rust: a Black Hole board game engine with a Monte Carlo planner.
//!
//! Black Hole is a two-player territory game on a triangular board of 21
//! cells. Players alternate placing numbered tiles; when a single empty cell
//! remains (the black hole), the score is the sum of the tile values
//! surrounding it.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`coords`] - Triangular index/coordinate mapping
//! - [`board`] - Core game logic (board state, placement, scoring)
//! - [`playout`] - Random game simulation for position evaluation
//! - [`planner`] - Monte Carlo move selection over randomized playouts
//!
//! ## Example
//!
//! ```
//! use blackhole_rust::board::Board;
//! use blackhole_rust::planner::pick_move;
//!
//! // Create a new game with a seeded random source
//! let mut board = Board::new();
//! let mut rng = fastrand::Rng::with_seed(42);
//!
//! // Let the planner choose the opening move, then apply it
//! let best = pick_move(&board, &mut rng).unwrap();
//! board.set_value(best).unwrap();
//! println!("Opening move: {best}\n{board}");
//! ```

pub mod board;
pub mod constants;
pub mod coords;
pub mod planner;
pub mod playout;
