//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Tile a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed by index 0-8, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a 9-character layout string.
    ///
    /// `X` and `O` are tiles, `_`, `.` and space are empty cells. Any other
    /// character or a wrong length yields `None`.
    ///
    /// ```
    /// use tictactoe_engine::{Board, Player, Square};
    ///
    /// let board = Board::from_layout("XX_OO____").unwrap();
    /// assert_eq!(board.get(1), Some(Square::Occupied(Player::X)));
    /// assert_eq!(board.free_cells(), vec![2, 5, 6, 7, 8]);
    /// ```
    pub fn from_layout(layout: &str) -> Option<Self> {
        if layout.chars().count() != CELL_COUNT {
            return None;
        }
        let mut squares = [Square::Empty; CELL_COUNT];
        for (slot, ch) in squares.iter_mut().zip(layout.chars()) {
            *slot = match ch.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '_' | '.' | ' ' => Square::Empty,
                _ => return None,
            };
        }
        Some(Self { squares })
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of the empty cells in ascending order.
    pub fn free_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `player`'s tile.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// The player whose turn it is, derived from tile counts (X moves first).
    pub fn next_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Puts `player`'s tile on an empty cell.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `index` is not 0-8 and
    /// [`MoveError::Occupied`] if the cell already holds a tile.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.squares.get_mut(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Empties a cell. Only the search uses this, to undo its own placements.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in self.squares.chunks(3) {
            writeln!(
                f,
                "| {} {} {} |",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        write!(f, "---------")
    }
}
