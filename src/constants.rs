//! Constants for board geometry and Monte Carlo parameters.
//!
//! This module contains all the configuration constants for the Black Hole
//! engine. The board is a triangle of cells stored in a flat 1D array;
//! see [`crate::coords`] for the index mapping.

// =============================================================================
// Board Geometry
// =============================================================================

/// The number of turns each player takes in a standard game.
pub const NUM_TURNS: usize = 10;

/// Total number of cells. Each player places `NUM_TURNS` tiles and exactly
/// one cell is left empty at the end of the game.
pub const BOARD_SIZE: usize = 2 * NUM_TURNS + 1;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Number of randomized playouts run per move decision.
pub const NUM_GAMES_TO_SIMULATE: usize = 2000;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Relative `(col, row)` offsets of the neighbors of a cell. The pattern is
/// a little tricky because of the triangular shape of the board: a cell at
/// `(col, row)` touches two cells in the row above, two in its own row, and
/// two in the row below.
pub const NEIGHBORS: [(isize, isize); 6] =
    [(-1, -1), (0, -1), (-1, 0), (1, 0), (0, 1), (1, 1)];
