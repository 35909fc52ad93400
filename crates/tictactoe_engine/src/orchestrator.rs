//! Match orchestration between two strategies.

use crate::error::MatchError;
use crate::players::{PlayerKind, Strategy};
use crate::rules::{GameOutcome, outcome};
use crate::types::{Board, Player};
use tracing::{debug, info, instrument};

/// Messages sent from the match to whoever renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The empty board, before the first move.
    Started {
        /// Board at start.
        board: Board,
    },
    /// A bot is about to choose a move.
    Thinking {
        /// Tile being played.
        player: Player,
        /// Kind of the bot.
        kind: PlayerKind,
    },
    /// A move was applied.
    MoveMade {
        /// Tile that was placed.
        player: Player,
        /// Cell it went to.
        index: usize,
        /// Board after the move.
        board: Board,
    },
    /// The match ended.
    Finished {
        /// Final outcome, never `InProgress`.
        outcome: GameOutcome,
    },
}

/// Receives [`GameEvent`]s as the match runs.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl EventSink for () {
    fn emit(&mut self, _event: GameEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event)
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Created, no move made yet.
    NotStarted,
    /// Moves are being played.
    InProgress,
    /// Ended with the given outcome.
    Finished(GameOutcome),
}

/// Orchestrates one game between two strategies.
///
/// The first strategy always plays X and moves first.
pub struct Match {
    board: Board,
    player_x: Box<dyn Strategy>,
    player_o: Box<dyn Strategy>,
    state: MatchState,
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("board", &self.board)
            .field("player_x", &self.player_x.kind())
            .field("player_o", &self.player_o.kind())
            .field("state", &self.state)
            .finish()
    }
}

impl Match {
    /// Creates a match on an empty board.
    pub fn new(player_x: Box<dyn Strategy>, player_o: Box<dyn Strategy>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            state: MatchState::NotStarted,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Runs the match to the end.
    ///
    /// Every applied move is reported before the outcome is rechecked, so a
    /// winning move ends the match immediately.
    ///
    /// # Errors
    ///
    /// [`MatchError::IllegalMove`] if a strategy picks an occupied or
    /// out-of-range cell, [`MatchError::Strategy`] if one fails to decide
    /// and [`MatchError::AlreadyFinished`] when called a second time.
    #[instrument(skip(self, sink), fields(x = %self.player_x.kind(), o = %self.player_o.kind()))]
    pub fn play(&mut self, mut sink: impl EventSink) -> Result<GameOutcome, MatchError> {
        if let MatchState::Finished(_) = self.state {
            return Err(MatchError::AlreadyFinished);
        }

        info!("Starting match");
        self.state = MatchState::InProgress;
        sink.emit(GameEvent::Started { board: self.board });

        loop {
            let player = self.board.next_to_move();
            let strategy = match player {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            let kind = strategy.kind();
            if kind.is_bot() {
                sink.emit(GameEvent::Thinking { player, kind });
            }

            let index = strategy
                .choose_move(&self.board, player, player.opponent())
                .map_err(|source| MatchError::Strategy {
                    player,
                    kind,
                    source,
                })?;
            self.board
                .place(index, player)
                .map_err(|source| MatchError::IllegalMove {
                    player,
                    kind,
                    source,
                })?;
            debug!(%player, index, "Move applied");
            sink.emit(GameEvent::MoveMade {
                player,
                index,
                board: self.board,
            });

            let result = outcome(&self.board);
            if result.is_terminal() {
                info!(%result, winner = ?result.winner(), "Match finished");
                self.state = MatchState::Finished(result);
                sink.emit(GameEvent::Finished { outcome: result });
                return Ok(result);
            }
        }
    }
}
