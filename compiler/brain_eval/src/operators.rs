//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value types are fixed, so each operator
//! family matches its operands as a pair. Integer arithmetic is 32-bit and
//! wraps on overflow; division truncates toward zero.

use brain_ir::{BinaryOp, OpFamily};

use crate::{EvalError, Value};

const NUMBER: &str = "a number";
const BOOLEAN: &str = "a boolean";

/// Evaluate a binary operation on already evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match op.family() {
        OpFamily::Arithmetic => {
            let (a, b) = numbers(left, right)?;
            eval_arithmetic(op, a, b)
        }
        OpFamily::Comparison => {
            if op == BinaryOp::Ne {
                return Err(EvalError::UnsupportedOperator { op: op.symbol() });
            }
            let (a, b) = numbers(left, right)?;
            Ok(Value::Bool(eval_comparison(op, a, b)))
        }
        OpFamily::Boolean => {
            let (a, b) = booleans(left, right)?;
            Ok(Value::Bool(match op {
                BinaryOp::Or => a || b,
                _ => a && b,
            }))
        }
    }
}

fn eval_arithmetic(op: BinaryOp, a: i32, b: i32) -> Result<Value, EvalError> {
    let n = match op {
        BinaryOp::Add => a.wrapping_add(b),
        BinaryOp::Sub => a.wrapping_sub(b),
        BinaryOp::Mul => a.wrapping_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.wrapping_div(b)
        }
        _ => return Err(EvalError::UnsupportedOperator { op: op.symbol() }),
    };
    Ok(Value::Number(n))
}

fn eval_comparison(op: BinaryOp, a: i32, b: i32) -> bool {
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Le => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::Ge => a >= b,
        _ => a == b,
    }
}

fn numbers(left: &Value, right: &Value) -> Result<(i32, i32), EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        (Value::Number(_), other) | (other, _) => Err(EvalError::type_mismatch(NUMBER, other)),
    }
}

fn booleans(left: &Value, right: &Value) -> Result<(bool, bool), EvalError> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok((*a, *b)),
        (Value::Bool(_), other) | (other, _) => Err(EvalError::type_mismatch(BOOLEAN, other)),
    }
}

#[cfg(test)]
mod tests;
