//! Black Hole board state and game rules.
//!
//! This module provides the core game logic:
//! - Board state as a flat array of optional tiles (see [`crate::coords`]
//!   for the triangular index mapping)
//! - Tile placement with strict turn alternation
//! - Terminal detection (exactly one empty cell left)
//! - Neighbor resolution on the triangular adjacency pattern
//! - Scoring of the finished game from the tiles around the black hole

use std::fmt;

use crate::constants::{NEIGHBORS, NUM_TURNS};
use crate::coords::{coords_of, index_of};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Index into per-player arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// The opponent of this player.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// An occupied cell's payload: the owning player and the value that player
/// assigned when placing it. Created on placement, never mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub owner: Player,
    pub value: u32,
}

/// Result of attempting an illegal board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside the board.
    IndexOutOfRange,
    /// Cell already holds a tile.
    CellOccupied,
    /// No empty cell left to pick from.
    NoEmptyCells,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange => write!(f, "cell index out of range"),
            BoardError::CellOccupied => write!(f, "cell already occupied"),
            BoardError::NoEmptyCells => write!(f, "no empty cells on the board"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The state of a Black Hole game.
///
/// Cells are stored in a flat array in triangular row order. The standard
/// board has `NUM_TURNS * 2 + 1` cells; tests use smaller boards via
/// [`Board::with_turns`].
#[derive(Clone)]
pub struct Board {
    num_turns: usize,
    cells: Vec<Option<Tile>>,
    current_player: Player,
    /// The value each player assigns to their next tile, starting at 1.
    next_value: [u32; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty standard board.
    pub fn new() -> Self {
        Self::with_turns(NUM_TURNS)
    }

    /// Create an empty board where each player takes `num_turns` turns,
    /// i.e. `2 * num_turns + 1` cells.
    pub fn with_turns(num_turns: usize) -> Self {
        Self {
            num_turns,
            cells: vec![None; 2 * num_turns + 1],
            current_player: Player::First,
            next_value: [1, 1],
        }
    }

    /// Number of turns per player on this board.
    #[inline]
    pub fn num_turns(&self) -> usize {
        self.num_turns
    }

    /// Number of cells on this board.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reset this board to its initial empty state without reallocating.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.current_player = Player::First;
        self.next_value = [1, 1];
    }

    /// Copy the full game state from another board, overwriting this one.
    ///
    /// Reuses the existing cell allocation; the planner calls this once per
    /// playout to rewind its scratch board.
    pub fn copy_state_from(&mut self, other: &Board) {
        self.num_turns = other.num_turns;
        self.cells.clone_from(&other.cells);
        self.current_player = other.current_player;
        self.next_value = other.next_value;
    }

    /// The tile at cell `i`, or `None` if the cell is empty or out of range.
    #[inline]
    pub fn tile(&self, i: usize) -> Option<Tile> {
        self.cells.get(i).copied().flatten()
    }

    /// The player whose turn is next.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The value the current player would assign if they moved right now.
    #[inline]
    pub fn current_player_value(&self) -> u32 {
        self.next_value[self.current_player.index()]
    }

    /// Place the current player's next tile at cell `i` and pass the turn.
    ///
    /// This is the sole mutator of game state besides [`Board::reset`].
    pub fn set_value(&mut self, i: usize) -> Result<(), BoardError> {
        let cell = self.cells.get_mut(i).ok_or(BoardError::IndexOutOfRange)?;
        if cell.is_some() {
            return Err(BoardError::CellOccupied);
        }
        let player = self.current_player;
        *cell = Some(Tile {
            owner: player,
            value: self.next_value[player.index()],
        });
        self.next_value[player.index()] += 1;
        self.current_player = player.other();
        Ok(())
    }

    /// Whether the game is over: exactly one cell left empty.
    pub fn game_over(&self) -> bool {
        self.cells.iter().filter(|c| c.is_none()).count() == 1
    }

    /// Index of the first empty cell, scanning in index order.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_none())
    }

    /// Indices of all empty cells, in index order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Score of the finished game: the sum of the values of all tiles
    /// surrounding the one remaining empty cell (the black hole).
    ///
    /// Returns 0 if the game is not over; that is the defined default, not
    /// an error.
    pub fn score(&self) -> i32 {
        if !self.game_over() {
            return 0;
        }
        let Some(hole) = self.first_empty() else {
            return 0;
        };
        let (col, row) = coords_of(hole);
        self.neighbor_tiles(col, row)
            .iter()
            .map(|t| t.value as i32)
            .sum()
    }

    /// All occupied tiles adjacent to `(col, row)`, in offset-table order.
    ///
    /// Candidates that fall outside the triangle are silently skipped.
    pub fn neighbor_tiles(&self, col: usize, row: usize) -> Vec<Tile> {
        NEIGHBORS
            .iter()
            .filter_map(|&(dc, dr)| {
                self.tile_at(col as isize + dc, row as isize + dr)
            })
            .collect()
    }

    /// The tile at the given coordinates, guarding against positions outside
    /// the triangle or beyond the last row.
    fn tile_at(&self, col: isize, row: isize) -> Option<Tile> {
        if row < 0 || col < 0 || col > row {
            return None;
        }
        let index = index_of(col as usize, row as usize);
        if index >= self.cells.len() {
            return None;
        }
        self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = {
            let (_, last_row) = coords_of(self.cells.len() - 1);
            last_row + 1
        };
        for row in 0..rows {
            for _ in 0..(rows - row - 1) {
                write!(f, "  ")?;
            }
            for col in 0..=row {
                let i = index_of(col, row);
                if i >= self.cells.len() {
                    break;
                }
                match self.cells[i] {
                    Some(t) => {
                        let mark = match t.owner {
                            Player::First => 'X',
                            Player::Second => 'O',
                        };
                        write!(f, "{mark}{:<2}", t.value)?;
                    }
                    None => write!(f, ".  ")?,
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
