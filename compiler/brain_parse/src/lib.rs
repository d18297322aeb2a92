//! Recursive descent parser for brain.
//!
//! Turns a [`TokenList`] into statements of the `brain_ir` tree. The grammar
//! has no statement separators: a statement ends where the next one cannot
//! continue it, and `;` is an empty statement of its own.
//!
//! # Module Structure
//!
//! - `cursor.rs`: token navigation and `expect` helpers
//! - `error.rs`: [`ParseError`]
//! - `grammar/stmt.rs`: statements and braced bodies
//! - `grammar/expr.rs`: the precedence chain, calls and primaries
//! - `grammar/operators.rs`: operator matching

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use brain_ir::{Expr, Stmt, StringInterner, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    /// Parse statements up to the end of input.
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts)
    }

    /// Parse exactly one expression spanning the whole input.
    pub fn parse_single_expr(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(self.cursor.error_expected(&TokenKind::Eof.to_string()));
        }
        Ok(expr)
    }
}

/// Parse one source fragment (a REPL line or a whole file).
pub fn parse_program(
    tokens: &TokenList,
    interner: &StringInterner,
) -> Result<Vec<Stmt>, ParseError> {
    let result = Parser::new(tokens, interner).parse_program();
    match &result {
        Ok(stmts) => {
            tracing::debug!(tokens = tokens.len(), statements = stmts.len(), "parsed fragment");
        }
        Err(err) => tracing::debug!(error = %err, span = ?err.span, "parse failed"),
    }
    result
}

/// Parse a standalone expression.
pub fn parse_expr(tokens: &TokenList, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(tokens, interner).parse_single_expr()
}
