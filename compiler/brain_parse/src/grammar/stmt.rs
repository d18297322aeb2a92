//! Statement parsing.

use brain_ir::{Body, Expr, Stmt, TokenKind};
use brain_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        match *self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                Ok(Stmt::Empty)
            }
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_braced_body()?)),
            TokenKind::If => self.parse_if(),
            TokenKind::While => {
                self.cursor.advance();
                let cond = self.parse_expr()?;
                let body = self.parse_braced_body()?;
                Ok(Stmt::While { cond, body })
            }
            TokenKind::New => {
                self.cursor.advance();
                let name = self.cursor.expect_ident()?;
                self.cursor.expect(&TokenKind::ColonEq)?;
                let value = self.parse_expr()?;
                Ok(Stmt::Declare { name, value })
            }
            // `ret := e` is sugar for the expression statement `return e`.
            TokenKind::Ret => {
                self.cursor.advance();
                self.cursor.expect(&TokenKind::ColonEq)?;
                let value = self.parse_expr()?;
                Ok(Stmt::Expr(Expr::ret(value)))
            }
            TokenKind::Ident(name) if matches!(self.cursor.peek_next_kind(), TokenKind::ColonEq) => {
                self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expr()?;
                Ok(Stmt::Assign { name, value })
            }
            TokenKind::Write => {
                self.cursor.advance();
                Ok(Stmt::Write(self.parse_expr()?))
            }
            _ if self.at_expr_start() => Ok(Stmt::Expr(self.parse_expr()?)),
            _ => Err(self.cursor.error_expected("statement")),
        }
    }

    /// `if cond { ... } else { ... }`, where `else if` nests the second `if`
    /// as the sole statement of the else branch.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(&TokenKind::If)?;
        let cond = self.parse_expr()?;
        let then_branch = self.parse_braced_body()?;

        let else_branch = if self.cursor.check(&TokenKind::Else) {
            self.cursor.advance();
            if self.cursor.check(&TokenKind::If) {
                let nested = self.parse_if()?;
                Some(Body::from(vec![nested]))
            } else {
                Some(self.parse_braced_body()?)
            }
        } else {
            None
        };

        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `{ stmt* }`
    pub(crate) fn parse_braced_body(&mut self) -> Result<Body, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.error_expected(&TokenKind::RBrace.to_string()));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.cursor.advance();
        Ok(Body::from(stmts))
    }
}
