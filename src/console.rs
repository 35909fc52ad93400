//! Process console and board renderer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tictactoe_engine::{Console, EventSink, GameEvent};
use tracing::warn;

/// [`Console`] over a line reader and a writer.
///
/// Input is decoded lossily, so bytes that are not UTF-8 reach the command
/// and coordinate parsers as replacement characters and are rejected there.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

/// [`IoConsole`] over the process's stdin and stdout.
pub type StdConsole = IoConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    /// Locks stdin for the rest of the process.
    pub fn stdio() -> Self {
        IoConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> IoConsole<R, W> {
    /// Creates a console reading from `reader` and printing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

/// Prints match events to a console.
///
/// Boards are printed framed after the start and after every move, then
/// the result line.
#[derive(Debug)]
pub struct ConsoleRenderer<C> {
    console: C,
    announce_bot_moves: bool,
}

impl<C: Console> ConsoleRenderer<C> {
    /// Creates a renderer; `announce_bot_moves` prints a line before each bot move.
    pub fn new(console: C, announce_bot_moves: bool) -> Self {
        Self {
            console,
            announce_bot_moves,
        }
    }
}

impl<C: Console> EventSink for ConsoleRenderer<C> {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started { board } | GameEvent::MoveMade { board, .. } => {
                self.console.say(&board.to_string());
            }
            GameEvent::Thinking { kind, .. } => {
                if self.announce_bot_moves {
                    self.console.say(&format!("Making move level \"{kind}\""));
                }
            }
            GameEvent::Finished { outcome } => self.console.say(&outcome.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::{Board, GameOutcome, Player, PlayerKind, ScriptedConsole};

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut console = IoConsole::new(Cursor::new(b"1 1\r\nexit".to_vec()), Vec::new());
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("1 1"));
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("exit"));
        assert_eq!(console.read_line("").unwrap(), None);
        assert_eq!(console.writer().as_slice(), b"> ");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_an_error() {
        let mut console = IoConsole::new(Cursor::new(b"\xff 1\n".to_vec()), Vec::new());
        let line = console.read_line("").unwrap().unwrap();
        assert_eq!(line, "\u{FFFD} 1");
    }

    #[test]
    fn test_say_writes_one_line() {
        let mut console = IoConsole::new(Cursor::new(Vec::new()), Vec::new());
        console.say("Draw");
        assert_eq!(console.writer().as_slice(), b"Draw\n");
    }

    #[test]
    fn test_renders_board_and_result() {
        let mut console = ScriptedConsole::default();
        let mut renderer = ConsoleRenderer::new(&mut console, true);
        let board = Board::from_layout("X________").unwrap();
        renderer.emit(GameEvent::Thinking {
            player: Player::X,
            kind: PlayerKind::Medium,
        });
        renderer.emit(GameEvent::MoveMade {
            player: Player::X,
            index: 0,
            board,
        });
        renderer.emit(GameEvent::Finished {
            outcome: GameOutcome::Draw,
        });

        assert_eq!(
            console.output(),
            [
                "Making move level \"medium\"",
                "---------\n| X     |\n|       |\n|       |\n---------",
                "Draw",
            ]
        );
    }

    #[test]
    fn test_quiet_renderer_skips_announcements() {
        let mut console = ScriptedConsole::default();
        let mut renderer = ConsoleRenderer::new(&mut console, false);
        renderer.emit(GameEvent::Thinking {
            player: Player::O,
            kind: PlayerKind::Hard,
        });
        assert!(console.output().is_empty());
    }
}
