//! Input handlers for the `read` expression.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads lines from stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Serves a fixed queue of lines, then end of input.
#[derive(Default)]
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Option<String> {
        self.lines.lock().pop_front()
    }

    /// Queue another line behind the ones not read yet.
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.lock().push_back(line.into());
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
    /// Always at end of input.
    Closed,
}

impl InputHandlerImpl {
    /// The next line without its terminator; `Ok(None)` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let line = match self {
            Self::Stdin(h) => h.read_line()?,
            Self::Scripted(h) => h.read_line(),
            Self::Closed => None,
        };
        Ok(line.map(|l| l.trim_end_matches(['\n', '\r']).to_owned()))
    }

    pub fn push_line(&self, line: impl Into<String>) {
        if let Self::Scripted(h) = self {
            h.push_line(line);
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(lines)))
}

pub fn closed_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Closed)
}
