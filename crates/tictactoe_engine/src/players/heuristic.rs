//! One-ply lookahead player ("medium").
//!
//! Tries, in order:
//! 1. complete one of its own lines,
//! 2. fill the third cell of any line whose other two cells hold the same tile,
//! 3. a random free cell.
//!
//! It does not see forks, so it loses to a careful opponent.

use super::{PlayerKind, Strategy};
use crate::error::StrategyError;
use crate::rng::SessionRng;
use crate::rules::WIN_COMBINATIONS;
use crate::types::{Board, Player, Square};
use tracing::debug;

/// Rotations of a line: the first two positions are checked, the third is
/// the candidate cell.
const ROTATIONS: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];

/// Win-then-block player with a random fallback.
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: SessionRng,
}

impl HeuristicStrategy {
    /// Creates a heuristic strategy; `rng` drives the fallback tier.
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

/// First `(line, rotation)` whose pair satisfies `pair_matches` and whose
/// third cell is free.
fn first_completion(
    board: &Board,
    pair_matches: impl Fn(Square, Square) -> bool,
) -> Option<usize> {
    WIN_COMBINATIONS.iter().find_map(|line| {
        ROTATIONS.iter().find_map(|&[a, b, c]| {
            let (first, second, third) = (line[a], line[b], line[c]);
            let pair = (board.get(first)?, board.get(second)?);
            (pair_matches(pair.0, pair.1) && board.is_empty(third)).then_some(third)
        })
    })
}

/// Cell that completes a line of `tile`.
fn winning_cell(board: &Board, tile: Player) -> Option<usize> {
    let own = Square::Occupied(tile);
    first_completion(board, |a, b| a == own && b == own)
}

/// Cell that completes any line two equal tiles already share.
fn blocking_cell(board: &Board) -> Option<usize> {
    first_completion(board, |a, b| a != Square::Empty && a == b)
}

impl Strategy for HeuristicStrategy {
    fn choose_move(
        &mut self,
        board: &Board,
        tile: Player,
        _opponent: Player,
    ) -> Result<usize, StrategyError> {
        if let Some(index) = winning_cell(board, tile) {
            debug!(%tile, index, "Completing own line");
            return Ok(index);
        }
        if let Some(index) = blocking_cell(board) {
            debug!(%tile, index, "Blocking line");
            return Ok(index);
        }
        let index = self
            .rng
            .choose(&board.free_cells())
            .ok_or(StrategyError::NoFreeCells)?;
        debug!(%tile, index, "No threats, random move");
        Ok(index)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(layout: &str, tile: Player) -> usize {
        let board = Board::from_layout(layout).unwrap();
        HeuristicStrategy::new(SessionRng::new(1))
            .choose_move(&board, tile, tile.opponent())
            .unwrap()
    }

    #[test]
    fn test_completes_own_row() {
        assert_eq!(decide("XX_OO____", Player::X), 2);
    }

    #[test]
    fn test_own_win_beats_block() {
        // X threatens cell 2 in an earlier line, but O can win at 5.
        assert_eq!(decide("XX_OO_X__", Player::O), 5);
        // Same with roles swapped.
        assert_eq!(decide("OO_XX____", Player::X), 5);
    }

    #[test]
    fn test_blocks_opponent() {
        // X threatens the top row; O has nothing to complete.
        assert_eq!(decide("XX__O____", Player::O), 2);
    }

    #[test]
    fn test_rotation_finds_gap_in_middle() {
        // Gap at position 1 of the top row: rotation (2, 0, 1).
        assert_eq!(decide("X_XO_O___", Player::X), 1);
    }

    #[test]
    fn test_rotation_finds_gap_at_start() {
        // Gap at position 0 of the left column: rotation (1, 2, 0).
        assert_eq!(decide("_O_X_OX__", Player::X), 0);
    }

    #[test]
    fn test_earlier_line_wins_tie() {
        // X can complete both row 0 (cell 2) and column 0 (cell 6); rows come first.
        assert_eq!(decide("XX_XOO_O_", Player::X), 2);
    }

    #[test]
    fn test_fallback_is_free_cell() {
        let board = Board::from_layout("X___O____").unwrap();
        let mut strategy = HeuristicStrategy::new(SessionRng::new(99));
        let index = strategy.choose_move(&board, Player::X, Player::O).unwrap();
        assert!(board.is_empty(index));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board = Board::from_layout("XOXXOOOXX").unwrap();
        let mut strategy = HeuristicStrategy::new(SessionRng::new(0));
        assert!(matches!(
            strategy.choose_move(&board, Player::X, Player::O),
            Err(StrategyError::NoFreeCells)
        ));
    }
}
