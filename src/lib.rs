//! Tictactoe - console front end for the tic-tac-toe engine
//!
//! # Architecture
//!
//! - **Cli**: clap arguments and subcommands
//! - **Config**: `tictactoe.toml` settings
//! - **Command loop**: `start <x> <o>` / `exit` over a [`Console`]
//! - **Console**: stdin/stdout console and board renderer
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tictactoe::CommandLoop;
//! use tictactoe_engine::{ScriptedConsole, SessionRng};
//!
//! let console = Rc::new(RefCell::new(ScriptedConsole::new(["start hard hard", "exit"])));
//! let mut session = CommandLoop::new(console.clone(), SessionRng::new(1), true);
//! session.run().unwrap();
//! assert_eq!(console.borrow().output().last().map(String::as_str), Some("Draw"));
//! ```
//!
//! [`Console`]: tictactoe_engine::Console

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod command;
mod command_loop;
mod config;
mod console;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Interactive loop
pub use command::{CommandError, ReplCommand};
pub use command_loop::{CommandLoop, Flow, SessionError};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Console I/O
pub use console::{ConsoleRenderer, IoConsole, StdConsole};
