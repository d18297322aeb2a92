//! Grammar productions, as `Parser` methods.

mod expr;
mod operators;
mod stmt;
