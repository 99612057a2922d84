//! Randomized playouts (random game simulation).
//!
//! A playout plays uniformly random moves on a board until the game ends,
//! then scores the result. The planner aggregates playout scores keyed by
//! the first move of each playout.
//!
//! Randomness comes from an explicitly passed [`fastrand::Rng`], so playouts
//! are reproducible from a seed.

use crate::board::{Board, BoardError};

/// Outcome of one finished playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutOutcome {
    /// The first move made during the playout, or `None` if the board was
    /// already terminal when the playout started.
    pub first_move: Option<usize>,
    /// Terminal score of the playout.
    pub score: i32,
}

/// Pick a uniformly random empty cell on the board.
///
/// Fails with [`BoardError::NoEmptyCells`] only when the board is full,
/// which callers rule out by checking [`Board::game_over`] first.
pub fn pick_random_move(board: &Board, rng: &mut fastrand::Rng) -> Result<usize, BoardError> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return Err(BoardError::NoEmptyCells);
    }
    Ok(moves[rng.usize(..moves.len())])
}

/// Play random moves on `board` until the game is over.
///
/// Mutates `board` in place; the planner rewinds it afterwards via
/// [`Board::copy_state_from`].
pub fn run_playout(board: &mut Board, rng: &mut fastrand::Rng) -> Result<PlayoutOutcome, BoardError> {
    let mut first_move = None;
    while !board.game_over() {
        let mv = pick_random_move(board, rng)?;
        if first_move.is_none() {
            first_move = Some(mv);
        }
        board.set_value(mv)?;
    }
    Ok(PlayoutOutcome {
        first_move,
        score: board.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_SIZE;

    #[test]
    fn test_pick_random_move_returns_empty_cell() {
        let mut board = Board::new();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let mv = pick_random_move(&board, &mut rng).unwrap();
            assert!(board.tile(mv).is_none());
        }
        // Leave only cell 13 empty; the random pick has no other choice.
        for i in 0..BOARD_SIZE {
            if i != 13 {
                board.set_value(i).unwrap();
            }
        }
        assert_eq!(pick_random_move(&board, &mut rng), Ok(13));
    }

    #[test]
    fn test_run_playout_reaches_terminal_state() {
        let mut board = Board::new();
        let mut rng = fastrand::Rng::with_seed(42);
        let outcome = run_playout(&mut board, &mut rng).unwrap();
        assert!(board.game_over());
        assert!(outcome.first_move.is_some());
        assert_eq!(outcome.score, board.score());
        assert!(outcome.score > 0);
    }

    #[test]
    fn test_run_playout_on_terminal_board() {
        let mut board = Board::with_turns(2);
        for i in 1..5 {
            board.set_value(i).unwrap();
        }
        assert!(board.game_over());
        let score = board.score();
        let mut rng = fastrand::Rng::with_seed(1);
        let outcome = run_playout(&mut board, &mut rng).unwrap();
        assert_eq!(outcome.first_move, None);
        assert_eq!(outcome.score, score);
    }

    #[test]
    fn test_playouts_reproducible_from_seed() {
        let board = Board::new();
        let mut a = board.clone();
        let mut b = board.clone();
        let mut rng_a = fastrand::Rng::with_seed(99);
        let mut rng_b = fastrand::Rng::with_seed(99);
        let out_a = run_playout(&mut a, &mut rng_a).unwrap();
        let out_b = run_playout(&mut b, &mut rng_b).unwrap();
        assert_eq!(out_a, out_b);
    }
}
