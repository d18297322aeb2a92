//! Tree-walking evaluator for brain.
//!
//! The evaluator consumes a parsed statement sequence and runs it against a
//! scoped environment with dynamic lookup. Failures never unwind: they are
//! reported once, raise the error flag held in [`EvalState`], and suppress
//! the effects of whatever runs after them in the same fragment.

mod config;
mod environment;
mod errors;
pub mod input_handler;
mod interpreter;
mod operators;
pub mod print_handler;
mod return_channel;
mod state;
mod unary_operators;
mod value;

pub use config::{EvalConfig, DEFAULT_READ_PROMPT};
pub use environment::{Environment, ScopeError};
pub use errors::EvalError;
pub use input_handler::{
    closed_handler, scripted_handler, stdin_handler, InputHandlerImpl, SharedInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stderr_handler, stdout_handler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use return_channel::ReturnChannel;
pub use state::EvalState;
pub use unary_operators::{evaluate_unary, UnaryOp};
pub use value::{Closure, Value};
