//! Runtime values.

use std::fmt;
use std::rc::Rc;

use brain_ir::{Body, Name};

/// The result of evaluating an expression.
///
/// Values are immutable. `Unset` doubles as "no meaningful result" and as
/// the placeholder substituted for any failed computation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i32),
    Bool(bool),
    Closure(Closure),
    Unset,
}

/// A lambda turned into a value.
///
/// Holds no environment: free variables in the body resolve against
/// whatever bindings are live when the closure is called.
#[derive(Clone, Debug)]
pub struct Closure {
    pub param: Name,
    pub body: Body,
}

impl PartialEq for Closure {
    /// Identity comparison: two closures are equal when they share the body
    /// of the same lambda node.
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param && Rc::ptr_eq(&self.body, &other.body)
    }
}

impl Value {
    /// Name of the value's type as it appears in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Closure(_) => "lambda",
            Value::Unset => "unset",
        }
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }

    pub fn as_number(&self) -> Option<i32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Closure(_) => f.write_str("lambda expression"),
            Value::Unset => f.write_str("Unset value!"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests;
