//! Commands accepted by the interactive loop.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_engine::PlayerKind;

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// `start <x-kind> <o-kind>`.
    Start {
        /// Kind playing X.
        player_x: PlayerKind,
        /// Kind playing O.
        player_o: PlayerKind,
    },
    /// `exit`.
    Exit,
}

/// Why a command line was rejected. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Not `start` with two kinds, nor `exit`.
    #[display("Invalid command")]
    Invalid,
    /// `start` with an unknown player kind.
    #[display("Bad parameters")]
    BadParameters,
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    /// Parses a line, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["exit"] => Ok(ReplCommand::Exit),
            ["start", x, o] => {
                let kind = |word: &str| word.parse::<PlayerKind>().map_err(|_| CommandError::BadParameters);
                Ok(ReplCommand::Start {
                    player_x: kind(x)?,
                    player_o: kind(o)?,
                })
            }
            _ => Err(CommandError::Invalid),
        }
    }
}
