//! Monte Carlo move planner.
//!
//! The planner estimates, for every candidate first move, the expected
//! terminal score over many randomized self-play games, and picks the move
//! with the best mean outcome.
//!
//! One scratch board is allocated per decision and rewound between playouts
//! with [`Board::copy_state_from`] instead of reallocating. That is a
//! performance optimization only; the caller's board is never mutated.

use crate::board::{Board, BoardError};
use crate::constants::NUM_GAMES_TO_SIMULATE;
use crate::playout::run_playout;

/// Aggregated playout statistics for one candidate first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Cell index of the candidate move.
    pub cell: usize,
    /// Truncated integer mean of the terminal scores of all playouts that
    /// started with this move.
    pub mean_score: i64,
    /// Number of playouts that started with this move.
    pub playouts: u32,
}

/// Run [`NUM_GAMES_TO_SIMULATE`] playouts from `board` and aggregate the
/// terminal scores by first move.
///
/// Candidates are returned in ascending cell order. The list is empty only
/// when `board` is already terminal, so no playout makes a move.
pub fn evaluate_moves(board: &Board, rng: &mut fastrand::Rng) -> Result<Vec<Candidate>, BoardError> {
    let mut sums = vec![0i64; board.len()];
    let mut counts = vec![0u32; board.len()];

    let mut scratch = Board::with_turns(board.num_turns());
    for _ in 0..NUM_GAMES_TO_SIMULATE {
        scratch.copy_state_from(board);
        let outcome = run_playout(&mut scratch, rng)?;
        if let Some(first) = outcome.first_move {
            sums[first] += outcome.score as i64;
            counts[first] += 1;
        }
    }

    Ok(counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(cell, &n)| Candidate {
            cell,
            mean_score: sums[cell] / n as i64,
            playouts: n,
        })
        .collect())
}

/// Pick the empty cell with the best estimated outcome for the player to
/// move, by mean terminal score over the simulated playouts.
///
/// Ties keep the lowest cell index. If the board is already terminal the
/// playouts record no first move at all; the planner then falls back to the
/// sole empty cell, and fails with [`BoardError::NoEmptyCells`] only on a
/// full board.
pub fn pick_move(board: &Board, rng: &mut fastrand::Rng) -> Result<usize, BoardError> {
    let candidates = evaluate_moves(board, rng)?;

    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        let better = match best {
            None => true,
            Some(b) => candidate.mean_score > b.mean_score,
        };
        if better {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => Ok(candidate.cell),
        None => board.first_empty().ok_or(BoardError::NoEmptyCells),
    }
}
