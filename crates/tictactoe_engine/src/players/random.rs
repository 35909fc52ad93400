//! Random player ("easy").

use super::{PlayerKind, Strategy};
use crate::error::StrategyError;
use crate::rng::SessionRng;
use crate::types::{Board, Player};
use tracing::debug;

/// Picks uniformly among the free cells.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: SessionRng,
}

impl RandomStrategy {
    /// Creates a random strategy drawing from `rng`.
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(
        &mut self,
        board: &Board,
        tile: Player,
        _opponent: Player,
    ) -> Result<usize, StrategyError> {
        let index = self
            .rng
            .choose(&board.free_cells())
            .ok_or(StrategyError::NoFreeCells)?;
        debug!(%tile, index, "Random move");
        Ok(index)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Easy
    }
}
