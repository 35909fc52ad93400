//! Text console collaborator.
//!
//! The engine never touches stdin or stdout directly. The interactive
//! strategy and the command loop read lines and print messages through
//! this trait; the binary implements it over the process streams and tests
//! implement it over scripted input.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Line-oriented input and message output.
pub trait Console {
    /// Shows `prompt` (without newline) and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing newline is removed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Prints one line of output.
    fn say(&mut self, message: &str);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn say(&mut self, message: &str) {
        (**self).say(message)
    }
}

impl<C: Console + ?Sized> Console for Rc<RefCell<C>> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.borrow_mut().read_line(prompt)
    }

    fn say(&mut self, message: &str) {
        self.borrow_mut().say(message)
    }
}

/// In-memory console fed from a fixed script.
///
/// Every prompt and message is recorded in order, which makes it the
/// console of choice for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines passed to [`Console::say`].
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown by [`Console::read_line`].
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}
