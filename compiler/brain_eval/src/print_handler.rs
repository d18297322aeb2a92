//! Print handlers for configurable output.
//!
//! The interpreter writes through two handlers: one for program output
//! (`write` and the read prompt) and one for diagnostics. Either can go to
//! a standard stream, into a buffer for tests and embedding, or nowhere.
//!
//! Enum dispatch rather than trait objects: the set of sinks is closed.

use std::io::{self, Write as _};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout, flushing partial lines so prompts appear immediately.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        print!("{msg}");
        // A prompt that never reaches the terminal is not worth an error.
        let _ = io::stdout().flush();
    }
}

/// Writes to stderr.
#[derive(Default)]
pub struct StderrPrintHandler;

impl StderrPrintHandler {
    pub fn println(&self, msg: &str) {
        eprintln!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        eprint!("{msg}");
    }
}

/// Captures output in a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured output and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Stderr(StderrPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Stderr(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Stderr(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Stderr(_) => String::new(),
        }
    }

    /// Captured output, emptying the buffer.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Stderr(_) => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn stderr_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stderr(StderrPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buffer_handler_captures_lines_and_fragments() {
        let handler = buffer_handler();
        handler.print("read> ");
        handler.println("42");
        assert_eq!(handler.get_output(), "read> 42\n");
    }

    #[test]
    fn take_output_empties_the_buffer() {
        let handler = buffer_handler();
        handler.println("1");
        assert_eq!(handler.take_output(), "1\n");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn stream_handlers_do_not_capture() {
        assert_eq!(stdout_handler().get_output(), "");
        assert_eq!(stderr_handler().take_output(), "");
    }

    #[test]
    fn buffer_handler_is_shared_across_threads() {
        let handler = buffer_handler();
        let writer = Arc::clone(&handler);
        let joined = std::thread::spawn(move || {
            for _ in 0..10 {
                writer.println("a");
            }
        })
        .join();

        assert!(joined.is_ok());
        assert_eq!(handler.get_output().lines().count(), 10);
    }
}
