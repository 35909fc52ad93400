//! Error types for the engine.

use crate::players::PlayerKind;
use crate::types::Player;
use derive_more::{Display, Error, From};

/// A placement the board refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a tile.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// A strategy could not produce a move.
#[derive(Debug, Display, Error, From)]
pub enum StrategyError {
    /// Asked to move on a board without free cells.
    #[display("No free cells left to choose from")]
    NoFreeCells,

    /// The interactive input source reached end of input.
    #[display("Input closed while waiting for coordinates")]
    InputClosed,

    /// Reading from the interactive input source failed.
    #[display("Failed to read input: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Errors that abort a match.
///
/// None of these are user-facing game conditions: they mean a strategy is
/// broken or its input went away.
#[derive(Debug, Display, Error)]
pub enum MatchError {
    /// A strategy returned a cell that is occupied or out of range.
    #[display("{} strategy playing {} chose an illegal move: {}", kind, player, source)]
    IllegalMove {
        /// Tile the strategy was playing.
        player: Player,
        /// Kind of the offending strategy.
        kind: PlayerKind,
        /// Why the board refused the move.
        source: MoveError,
    },

    /// A strategy failed to decide.
    #[display("{} strategy playing {} failed: {}", kind, player, source)]
    Strategy {
        /// Tile the strategy was playing.
        player: Player,
        /// Kind of the failing strategy.
        kind: PlayerKind,
        /// Underlying failure.
        source: StrategyError,
    },

    /// `play` was called on a match that already finished.
    #[display("Match is already finished")]
    AlreadyFinished,
}
