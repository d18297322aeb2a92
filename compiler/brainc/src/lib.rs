//! Driver for brain: the REPL session, command implementations and logging
//! setup behind the `brain` binary.

pub mod commands;
pub mod config;
mod diagnostic;
mod session;
pub mod tracing_setup;

pub use config::{ConfigError, ReplConfig};
pub use diagnostic::render_parse_error;
pub use session::{Session, SessionError};
