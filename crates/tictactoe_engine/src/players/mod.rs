//! Strategy trait and implementations.

mod heuristic;
mod human;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use human::{COORDINATES_PROMPT, HumanStrategy, OCCUPIED_MESSAGE};
pub use minimax::{Evaluation, MinimaxStrategy, WIN_SCORE, minimax};
pub use random::RandomStrategy;

use crate::console::Console;
use crate::error::StrategyError;
use crate::rng::SessionRng;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that picks moves.
///
/// The returned index must be a free cell of `board`. Implementations must
/// leave `board` untouched.
pub trait Strategy {
    /// Chooses a cell for `tile`, with `opponent` as the other player.
    fn choose_move(
        &mut self,
        board: &Board,
        tile: Player,
        opponent: Player,
    ) -> Result<usize, StrategyError>;

    /// Which kind of player this is.
    fn kind(&self) -> PlayerKind;
}

/// The four player kinds accepted by `start`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Human at the console.
    User,
    /// Uniformly random moves.
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Full minimax search.
    Hard,
}

impl PlayerKind {
    /// Whether moves come from the engine rather than a person.
    pub fn is_bot(self) -> bool {
        self != PlayerKind::User
    }
}

/// Builds strategies from kinds.
///
/// Each random-using strategy gets its own generator forked from the
/// factory's, so a whole session replays from one seed.
#[derive(Debug)]
pub struct StrategyFactory<C> {
    rng: SessionRng,
    console: C,
}

impl<C: Console + Clone + 'static> StrategyFactory<C> {
    /// Creates a factory; `console` is cloned into every human strategy.
    pub fn new(rng: SessionRng, console: C) -> Self {
        Self { rng, console }
    }

    /// Seed of the factory's generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Resolves `kind` into a strategy.
    #[instrument(skip(self))]
    pub fn build(&mut self, kind: PlayerKind) -> Box<dyn Strategy> {
        debug!(%kind, "Building strategy");
        match kind {
            PlayerKind::User => Box::new(HumanStrategy::new(self.console.clone())),
            PlayerKind::Easy => Box::new(RandomStrategy::new(self.rng.fork())),
            PlayerKind::Medium => Box::new(HeuristicStrategy::new(self.rng.fork())),
            PlayerKind::Hard => Box::new(MinimaxStrategy::new()),
        }
    }
}
