//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::PlayerKind;

/// Tic-tac-toe on the console - humans and bots of three strengths
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with easy, medium and hard bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for bot randomness (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run; the interactive loop when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read `start <x> <o>` and `exit` commands from stdin
    Repl,

    /// Play a single match and exit
    Play {
        /// Player kind for X (user, easy, medium, hard)
        player_x: PlayerKind,

        /// Player kind for O (user, easy, medium, hard)
        player_o: PlayerKind,
    },

    /// List the player kinds
    Kinds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_loop() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_play_parses_kinds() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "hard", "Easy", "--seed", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                player_x: PlayerKind::Hard,
                player_o: PlayerKind::Easy,
            })
        );
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_play_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "hard", "expert"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "--config", "other.toml", "kinds"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.command, Some(Command::Kinds));
    }
}
