//! Expression parsing.
//!
//! Precedence, loosest first: `return`, `or`, `and`, comparisons, `+ -`,
//! `* /`, prefix `- not !`, then `@` calls. Binary levels associate to the
//! left, and so does `@`: `f @ a @ b` is `(f @ a) @ b`.

use brain_ir::{BinaryOp, Expr, TokenKind};
use brain_stack::ensure_sufficient_stack;

use super::operators::UnaryOp;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to survive deeply nested input.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(&TokenKind::Return) {
            self.cursor.advance();
            let value = self.parse_expr()?;
            return Ok(Expr::ret(value));
        }
        self.parse_or()
    }

    /// Left-associative binary level: `next (op next)*`.
    fn parse_binary_level(
        &mut self,
        match_op: fn(&Self) -> Option<BinaryOp>,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self) {
            self.cursor.advance();
            let right = next(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_or_op, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_and_op, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_comparison_op, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_additive_op, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_multiplicative_op, Self::parse_unary)
    }

    /// Prefix operators over a call chain.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.match_unary_op() {
            Some(op) => {
                self.cursor.advance();
                let operand = self.parse_unary()?;
                Ok(apply_unary(op, operand))
            }
            None => self.parse_call(),
        }
    }

    /// `primary ('@' arg)*`
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut callee = self.parse_primary()?;
        while self.cursor.check(&TokenKind::At) {
            self.cursor.advance();
            let arg = self.parse_call_arg()?;
            callee = Expr::call(callee, arg);
        }
        Ok(callee)
    }

    /// A call argument: prefix operators over a primary, without a call chain
    /// of its own.
    fn parse_call_arg(&mut self) -> Result<Expr, ParseError> {
        match self.match_unary_op() {
            Some(op) => {
                self.cursor.advance();
                let operand = self.parse_call_arg()?;
                Ok(apply_unary(op, operand))
            }
            None => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match *self.cursor.current_kind() {
            TokenKind::Int(n) => Expr::Number(n),
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),
            TokenKind::Ident(name) => Expr::Ident(name),
            TokenKind::Read => Expr::Read,
            TokenKind::Lambda => return self.parse_lambda(),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => return Err(self.cursor.error_expected("expression")),
        };
        self.cursor.advance();
        Ok(expr)
    }

    /// `lambda param { body }`
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        self.cursor.expect(&TokenKind::Lambda)?;
        let param = self.cursor.expect_ident()?;
        let body = self.parse_braced_body()?;
        Ok(Expr::lambda(param, body))
    }
}

fn apply_unary(op: UnaryOp, operand: Expr) -> Expr {
    match op {
        UnaryOp::Neg => Expr::Neg(Box::new(operand)),
        UnaryOp::Not => Expr::Not(Box::new(operand)),
    }
}
