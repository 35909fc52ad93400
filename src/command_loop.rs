//! Interactive `start` / `exit` loop.

use crate::command::ReplCommand;
use crate::console::ConsoleRenderer;
use derive_more::{Display, Error, From};
use tictactoe_engine::{
    Console, GameOutcome, Match, MatchError, PlayerKind, SessionRng, StrategyError,
    StrategyFactory,
};
use tracing::{info, instrument, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Exit,
}

/// Failures that end a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading a command failed.
    #[display("Failed to read command: {}", _0)]
    Io(std::io::Error),

    /// A match aborted.
    #[display("{}", _0)]
    Match(MatchError),
}

/// Reads commands and runs one match per `start`.
///
/// Matches never overlap: a `start` runs its match to completion before
/// the next command is read.
#[derive(Debug)]
pub struct CommandLoop<C> {
    console: C,
    factory: StrategyFactory<C>,
    announce_bot_moves: bool,
    matches_played: usize,
}

impl<C: Console + Clone + 'static> CommandLoop<C> {
    /// Creates a loop over `console`; bots draw randomness from `rng`.
    pub fn new(console: C, rng: SessionRng, announce_bot_moves: bool) -> Self {
        Self {
            factory: StrategyFactory::new(rng, console.clone()),
            console,
            announce_bot_moves,
            matches_played: 0,
        }
    }

    /// Number of matches that ran to an outcome.
    pub fn matches_played(&self) -> usize {
        self.matches_played
    }

    /// Runs until `exit` or end of input.
    #[instrument(skip(self), fields(seed = self.factory.seed()))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Command loop started");
        while let Some(line) = self.console.read_line("")? {
            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }
        info!(matches = self.matches_played, "Command loop finished");
        Ok(())
    }

    /// Handles one command line.
    ///
    /// Rejected commands are reported to the console and leave the loop
    /// untouched. End of input inside a match stops the loop.
    #[instrument(skip(self))]
    pub fn execute(&mut self, line: &str) -> Result<Flow, SessionError> {
        match line.parse::<ReplCommand>() {
            Ok(ReplCommand::Exit) => Ok(Flow::Exit),
            Ok(ReplCommand::Start { player_x, player_o }) => {
                match self.play(player_x, player_o) {
                    Ok(_) => Ok(Flow::Continue),
                    Err(MatchError::Strategy {
                        source: StrategyError::InputClosed,
                        ..
                    }) => Ok(Flow::Exit),
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Rejected command");
                self.console.say(&e.to_string());
                Ok(Flow::Continue)
            }
        }
    }

    /// Plays one match between freshly built strategies.
    pub fn play(
        &mut self,
        player_x: PlayerKind,
        player_o: PlayerKind,
    ) -> Result<GameOutcome, MatchError> {
        let mut game = Match::new(self.factory.build(player_x), self.factory.build(player_o));
        let renderer = ConsoleRenderer::new(&mut self.console, self.announce_bot_moves);
        let outcome = game.play(renderer)?;
        self.matches_played += 1;
        Ok(outcome)
    }
}
