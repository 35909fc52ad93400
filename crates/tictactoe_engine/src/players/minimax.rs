//! Exhaustive minimax player ("hard").
//!
//! The 3x3 tree is small enough to search completely on every move, so
//! there is no pruning and no cache. The searched board is a private copy;
//! every trial placement goes through [`Placement`], which empties the cell
//! again when it is dropped.

use super::{PlayerKind, Strategy};
use crate::error::StrategyError;
use crate::rules::has_won;
use crate::types::{Board, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a position won by the maximizing tile.
pub const WIN_SCORE: i32 = 10;

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// +10 maximizing tile wins, -10 minimizing tile wins, 0 draw.
    pub score: i32,
    /// Best cell for the player to move; `None` on terminal positions.
    pub index: Option<usize>,
    /// Moves until the game ends along the chosen line.
    pub plies: u32,
}

impl Evaluation {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            index: None,
            plies: 0,
        }
    }

    /// Ordering key from the point of view of the side choosing.
    ///
    /// Higher is better: the score first, then winning sooner or losing later.
    fn rank(&self, maximizing: bool) -> (i32, i64) {
        let advantage = if maximizing { self.score } else { -self.score };
        let plies = i64::from(self.plies);
        let tempo = match advantage.signum() {
            1 => -plies,
            -1 => plies,
            _ => 0,
        };
        (advantage, tempo)
    }
}

/// A tile placed for the duration of one branch.
struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, index: usize, tile: Player) -> Option<Self> {
        board.place(index, tile).ok()?;
        Some(Self { board, index })
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

/// Searches `board` with `to_move` placing next.
///
/// Scores are from `maximizing`'s point of view. Terminal checks run in the
/// order maximizing win, minimizing win, full board. Children are tried in
/// ascending cell order and ties keep the earliest cell. `board` is
/// returned unchanged.
pub fn minimax(
    board: &mut Board,
    to_move: Player,
    maximizing: Player,
    minimizing: Player,
) -> Evaluation {
    if has_won(board, maximizing) {
        return Evaluation::terminal(WIN_SCORE);
    }
    if has_won(board, minimizing) {
        return Evaluation::terminal(-WIN_SCORE);
    }

    let choosing_for_max = to_move == maximizing;
    let mut best: Option<Evaluation> = None;
    for index in board.free_cells() {
        let Some(mut trial) = Placement::new(board, index, to_move) else {
            continue;
        };
        let reply = minimax(&mut trial, to_move.opponent(), maximizing, minimizing);
        drop(trial);

        let candidate = Evaluation {
            score: reply.score,
            index: Some(index),
            plies: reply.plies + 1,
        };
        let better = best.is_none_or(|current| {
            candidate.rank(choosing_for_max) > current.rank(choosing_for_max)
        });
        if better {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| Evaluation::terminal(0))
}

/// Perfect player backed by [`minimax`].
#[derive(Debug, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates a minimax strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board), fields(free = board.free_cells().len()))]
    fn choose_move(
        &mut self,
        board: &Board,
        tile: Player,
        opponent: Player,
    ) -> Result<usize, StrategyError> {
        let mut scratch = *board;
        let evaluation = minimax(&mut scratch, tile, tile, opponent);
        debug_assert_eq!(&scratch, board, "search must restore every cell it tries");
        let index = evaluation.index.ok_or(StrategyError::NoFreeCells)?;
        debug!(%tile, index, score = evaluation.score, plies = evaluation.plies, "Search chose move");
        Ok(index)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Hard
    }
}
