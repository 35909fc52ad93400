//! Tictactoe - console game
//!
//! Plays tic-tac-toe between humans and bots on stdin/stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use tictactoe::{AppConfig, Cli, Command, CommandLoop, ConsoleRenderer, StdConsole};
use tictactoe_engine::{Match, PlayerKind, SessionRng, StrategyFactory};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_seed(cli.seed);
    initialize_tracing(config.log_filter());

    let rng = match config.seed() {
        Some(seed) => SessionRng::new(*seed),
        None => SessionRng::from_random(),
    };
    info!(seed = rng.seed(), "Session generator ready");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(&config, rng),
        Command::Play { player_x, player_o } => run_match(&config, rng, player_x, player_o),
        Command::Kinds => {
            for kind in PlayerKind::iter() {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

/// Run the interactive command loop
#[instrument(skip_all)]
fn run_repl(config: &AppConfig, rng: SessionRng) -> Result<()> {
    let console = Rc::new(RefCell::new(StdConsole::stdio()));
    let mut session = CommandLoop::new(console, rng, *config.announce_bot_moves());
    session.run()?;
    Ok(())
}

/// Run a single match
#[instrument(skip(config, rng))]
fn run_match(
    config: &AppConfig,
    rng: SessionRng,
    player_x: PlayerKind,
    player_o: PlayerKind,
) -> Result<()> {
    let console = Rc::new(RefCell::new(StdConsole::stdio()));
    let mut factory = StrategyFactory::new(rng, console.clone());
    let mut game = Match::new(factory.build(player_x), factory.build(player_o));
    let outcome = game.play(ConsoleRenderer::new(console, *config.announce_bot_moves()))?;
    info!(%outcome, "Match complete");
    Ok(())
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
