//! Unary operator implementations for the evaluator.

use crate::{EvalError, Value};

/// Prefix operators of the expression tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation, wrapping on `i32::MIN`.
    Neg,
    /// Logical not.
    Not,
}

pub fn evaluate_unary(op: UnaryOp, value: &Value) -> Result<Value, EvalError> {
    match (op, value) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(n.wrapping_neg())),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, other) => Err(EvalError::type_mismatch("a number", other)),
        (UnaryOp::Not, other) => Err(EvalError::type_mismatch("a boolean", other)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn negation() {
        assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::Number(5)), Ok(Value::Number(-5)));
        assert_eq!(
            evaluate_unary(UnaryOp::Neg, &Value::Number(i32::MIN)),
            Ok(Value::Number(i32::MIN))
        );
    }

    #[test]
    fn logical_not() {
        assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Bool(false)), Ok(Value::Bool(true)));
    }

    #[test]
    fn wrong_operand_type() {
        assert_eq!(
            evaluate_unary(UnaryOp::Not, &Value::Number(1)),
            Err(EvalError::TypeMismatch {
                expected: "a boolean",
                found: "number"
            })
        );
        assert_eq!(
            evaluate_unary(UnaryOp::Neg, &Value::Unset),
            Err(EvalError::TypeMismatch {
                expected: "a number",
                found: "unset"
            })
        );
    }
}
