//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use brain_ir::SharedInterner;

use super::Interpreter;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stderr_handler, stdout_handler, SharedPrintHandler};
use crate::{Environment, EvalConfig, EvalState};

/// Builder for [`Interpreter`].
///
/// Defaults: stdout for program output, stderr for diagnostics, stdin for
/// `read`, an empty environment and [`EvalConfig::default`].
pub struct InterpreterBuilder {
    interner: SharedInterner,
    env: Option<Environment>,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
    diagnostic_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            env: None,
            config: EvalConfig::default(),
            print_handler: None,
            diagnostic_handler: None,
            input_handler: None,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit the number of simultaneously active closure calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.config.max_call_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn read_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.read_prompt = prompt.into();
        self
    }

    /// Where `write` output and the read prompt go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `ERROR: ...` lines go.
    #[must_use]
    pub fn diagnostic_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.diagnostic_handler = Some(handler);
        self
    }

    /// Where `read` takes its lines from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            state: EvalState::new(),
            config: self.config,
            interner: self.interner,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            diagnostic_handler: self.diagnostic_handler.unwrap_or_else(stderr_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            call_depth: 0,
        }
    }
}
