//! Brain IR - names, spans and the abstract syntax tree.
//!
//! The tree is a closed set of enums: [`Expr`] for computations that yield a
//! value and [`Stmt`] for effects. Statement sequences are shared slices
//! ([`Body`]), so a closure value can hold the same body its lambda node
//! owns without copying it.
//!
//! Every node also exposes a label and its children through [`NodeRef`].
//! These exist for diagnostics and the `tree` printer only; evaluation matches
//! on the concrete variants.

mod ast;
mod interner;
mod name;
pub mod pretty;
mod span;
mod token;

pub use ast::{BinaryOp, Body, Expr, Lambda, NodeRef, OpFamily, Program, Stmt};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
