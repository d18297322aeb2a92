//! Operator matching helpers.

use brain_ir::{BinaryOp, TokenKind};

use crate::Parser;

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    Neg,
    Not,
}

impl Parser<'_> {
    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Or | TokenKind::PipePipe => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::And | TokenKind::AmpAmp => Some(BinaryOp::And),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::Ne),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::Le),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Not | TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// Whether the current token can begin an expression.
    pub(crate) fn at_expr_start(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            TokenKind::Int(_)
                | TokenKind::Ident(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Read
                | TokenKind::Lambda
                | TokenKind::LParen
                | TokenKind::Return
        ) || self.match_unary_op().is_some()
    }
}
