//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Strategies iterate this in declaration order, so the order decides
/// which of several equally good cells they pick.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` fills any winning line.
// No #[instrument]: minimax calls this at every node.
pub fn has_won(board: &Board, player: Player) -> bool {
    let tile = Some(Square::Occupied(player));
    WIN_COMBINATIONS
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == tile))
}
