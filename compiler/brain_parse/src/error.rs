//! Parse error type.

use brain_ir::Span;
use thiserror::Error;

/// A syntax error at a source location.
///
/// The parser stops at the first error; there is no recovery. `Display`
/// renders the message alone so callers can attach the location the way
/// they see fit (the REPL draws a caret under the offending token).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// `expected <what>, found <found>`
    #[cold]
    pub fn expected(what: &str, found: &str, span: Span) -> Self {
        ParseError::new(format!("expected {what}, found {found}"), span)
    }
}
