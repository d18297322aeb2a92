//! Tree-walking interpreter for brain.
//!
//! # Architecture
//!
//! - `expr.rs`: [`Interpreter::eval`], one arm per expression variant
//! - `stmt.rs`: [`Interpreter::exec`] and [`Interpreter::exec_seq`]
//! - `call.rs`: closure application and the call-depth limit
//! - `scope_guard.rs`: RAII guard that closes a scope on drop
//! - `builder.rs`: [`InterpreterBuilder`]
//!
//! Evaluation is total. A failing node reports through the diagnostic
//! handler, raises the error flag in [`EvalState`] and yields
//! [`Value::Unset`]; every statement and effectful expression checks the
//! flag first, so the rest of the fragment runs without effects.

mod builder;
mod call;
mod expr;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use brain_ir::{SharedInterner, Stmt, StringInterner};

use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalConfig, EvalError, EvalState, ScopeError, Value};

/// The evaluator: environment, error flag, return channel and I/O handlers.
pub struct Interpreter {
    pub env: Environment,
    pub state: EvalState,
    config: EvalConfig,
    interner: SharedInterner,
    print_handler: SharedPrintHandler,
    diagnostic_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
    /// Closure calls currently executing.
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter with default configuration and standard streams.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run one top-level fragment: lower the error flag, then execute.
    ///
    /// Returns `true` when the fragment finished without raising the flag.
    pub fn run_fragment(&mut self, stmts: &[Stmt]) -> bool {
        self.state.clear_error();
        self.exec_seq(stmts);
        !self.state.has_failed()
    }

    #[inline]
    pub fn has_failed(&self) -> bool {
        self.state.has_failed()
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn diagnostic_handler(&self) -> &SharedPrintHandler {
        &self.diagnostic_handler
    }

    pub fn input_handler(&self) -> &SharedInputHandler {
        &self.input_handler
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Report `err` unless the flag is already raised, then raise it.
    ///
    /// Always yields `Unset` so callers can return the result directly.
    #[cold]
    pub(crate) fn report(&mut self, err: EvalError) -> Value {
        if self.state.fail() {
            tracing::debug!(error = %err, depth = self.env.depth(), "evaluation error");
            self.diagnostic_handler.println(&format!("ERROR: {err}"));
        }
        Value::Unset
    }

    #[cold]
    pub(crate) fn report_scope(&mut self, err: ScopeError) -> Value {
        let err = EvalError::from_scope(err, &self.interner);
        self.report(err)
    }
}
