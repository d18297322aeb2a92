//! Evaluation state shared across every node of a pass.

use crate::{ReturnChannel, Value};

/// The error flag and the return channel.
///
/// While the flag is raised, statements are skipped and effectful
/// expressions yield `Unset`. The driver lowers it at the start of each
/// top-level fragment. The return channel survives fragments: values left
/// on it stay pending until some call pops them.
#[derive(Debug, Default)]
pub struct EvalState {
    failed: bool,
    pub returns: ReturnChannel,
}

impl EvalState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Raise the flag. Returns `true` if it was not already raised.
    pub fn fail(&mut self) -> bool {
        !std::mem::replace(&mut self.failed, true)
    }

    pub fn clear_error(&mut self) {
        self.failed = false;
    }

    pub fn push_return(&mut self, value: Value) {
        self.returns.push(value);
    }

    pub fn pop_return(&mut self) -> Value {
        self.returns.pop()
    }
}
