//! Game outcome derived from a board.

use super::draw::is_full;
use super::win::has_won;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board is full without a winner.
    #[display("Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[display("Game not finished")]
    InProgress,
}

impl GameOutcome {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::XWins => Some(Player::X),
            GameOutcome::OWins => Some(Player::O),
            GameOutcome::Draw | GameOutcome::InProgress => None,
        }
    }
}

/// Evaluates the board.
///
/// X is checked before O, so a (unreachable) board where both players
/// completed a line reports X as the winner.
pub fn outcome(board: &Board) -> GameOutcome {
    if has_won(board, Player::X) {
        GameOutcome::XWins
    } else if has_won(board, Player::O) {
        GameOutcome::OWins
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
