//! A REPL session: the interner, everything entered so far, and the
//! interpreter that ran it.

use brain_eval::{EvalConfig, Interpreter, InterpreterBuilder};
use brain_ir::{pretty, Program, SharedInterner};
use brain_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The fragment did not parse; nothing was appended or run.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct Session {
    interner: SharedInterner,
    program: Program,
    interpreter: Interpreter,
}

impl Session {
    /// Session on the standard streams.
    pub fn new(config: EvalConfig) -> Self {
        Self::with_builder(|builder| builder.config(config))
    }

    /// Session whose interpreter is configured by `configure`, for custom
    /// handlers.
    pub fn with_builder(
        configure: impl FnOnce(InterpreterBuilder) -> InterpreterBuilder,
    ) -> Self {
        let interner = SharedInterner::new();
        let interpreter = configure(InterpreterBuilder::new(interner.clone())).build();
        Session {
            interner,
            program: Program::new(),
            interpreter,
        }
    }

    /// One REPL step: clear the error flag, parse `source`, append it to the
    /// program and run just the new statements.
    ///
    /// Returns whether the fragment ran without raising the error flag.
    pub fn eval_source(&mut self, source: &str) -> Result<bool, SessionError> {
        self.interpreter.clear_error();
        let tokens = brain_lexer::lex(source, &self.interner);
        let stmts = brain_parse::parse_program(&tokens, &self.interner)?;

        let fresh = self.program.append(stmts);
        tracing::debug!(statements = fresh.len(), "running fragment");
        Ok(self.interpreter.run_fragment(fresh))
    }

    /// The accumulated program as a tree.
    pub fn tree(&self) -> String {
        pretty::print_tree(self.program.stmts(), &self.interner)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }
}
