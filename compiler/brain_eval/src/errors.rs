//! Evaluation errors.
//!
//! Nothing here unwinds. The interpreter reports an error once through its
//! diagnostic handler, raises the error flag and carries on with
//! [`Value::Unset`](crate::Value::Unset) in place of the failed result.

use brain_ir::StringInterner;
use thiserror::Error;

use crate::ScopeError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Division by zero!")]
    DivisionByZero,

    #[error("No binding for variable `{name}` exists!")]
    UnboundVariable { name: String },

    #[error("Variable `{name}` already bound!")]
    DuplicateDeclaration { name: String },

    #[error("Cannot rebind `{name}` because it is not bound!")]
    RebindUnbound { name: String },

    #[error("Attempting to call a non-function.")]
    CallNonFunction,

    #[error("Expected {expected}, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Operator `{op}` is not supported")]
    UnsupportedOperator { op: &'static str },

    #[error("Maximum call depth of {max_depth} exceeded")]
    RecursionLimit { max_depth: usize },

    #[error("Scope corrupted: `{name}` is declared in the current scope but has no binding")]
    ScopeCorrupted { name: String },
}

impl EvalError {
    /// Error for a failed lookup or declaration, naming the variable.
    pub fn from_scope(err: ScopeError, interner: &StringInterner) -> Self {
        match err {
            ScopeError::Unbound(name) => EvalError::UnboundVariable {
                name: interner.lookup(name).to_string(),
            },
            ScopeError::AlreadyDeclared(name) => EvalError::DuplicateDeclaration {
                name: interner.lookup(name).to_string(),
            },
            ScopeError::Corrupted(name) => EvalError::ScopeCorrupted {
                name: interner.lookup(name).to_string(),
            },
        }
    }

    /// Error for a failed rebind: an unbound name reads as "cannot rebind".
    pub fn from_rebind(err: ScopeError, interner: &StringInterner) -> Self {
        match err {
            ScopeError::Unbound(name) => EvalError::RebindUnbound {
                name: interner.lookup(name).to_string(),
            },
            other => Self::from_scope(other, interner),
        }
    }

    #[cold]
    pub fn type_mismatch(expected: &'static str, found: &crate::Value) -> Self {
        EvalError::TypeMismatch {
            expected,
            found: found.type_name(),
        }
    }
}
