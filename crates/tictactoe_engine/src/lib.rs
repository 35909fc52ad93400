//! Tic-tac-toe engine - rules, strategies and match orchestration.
//!
//! # Architecture
//!
//! - **Board**: 9-cell grid, placement, free cells
//! - **Rules**: win lines, draw detection, outcome
//! - **Players**: random, heuristic, minimax and human strategies
//! - **Orchestrator**: runs a match between two strategies
//!
//! The engine performs no I/O of its own. Human input and rendering go
//! through the [`Console`] and [`EventSink`] traits.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameOutcome, Match, MinimaxStrategy};
//!
//! let mut game = Match::new(
//!     Box::new(MinimaxStrategy::new()),
//!     Box::new(MinimaxStrategy::new()),
//! );
//! assert_eq!(game.play(()).unwrap(), GameOutcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod orchestrator;
mod players;
mod position;
mod rng;
mod rules;
mod types;

pub use console::{Console, ScriptedConsole};
pub use error::{MatchError, MoveError, StrategyError};
pub use orchestrator::{EventSink, GameEvent, Match, MatchState};
pub use players::{
    COORDINATES_PROMPT, Evaluation, HeuristicStrategy, HumanStrategy, MinimaxStrategy,
    OCCUPIED_MESSAGE, PlayerKind, RandomStrategy, Strategy, StrategyFactory, WIN_SCORE, minimax,
};
pub use position::{CoordinateError, Coordinates};
pub use rng::SessionRng;
pub use rules::{GameOutcome, WIN_COMBINATIONS, has_won, is_full, outcome};
pub use types::{Board, CELL_COUNT, Player, Square};
