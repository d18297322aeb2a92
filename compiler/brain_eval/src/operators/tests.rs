use brain_ir::BinaryOp;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn num(op: BinaryOp, a: i32, b: i32) -> Result<Value, EvalError> {
    evaluate_binary(op, &Value::Number(a), &Value::Number(b))
}

#[test]
fn arithmetic() {
    assert_eq!(num(BinaryOp::Add, 2, 3), Ok(Value::Number(5)));
    assert_eq!(num(BinaryOp::Sub, 2, 3), Ok(Value::Number(-1)));
    assert_eq!(num(BinaryOp::Mul, -4, 3), Ok(Value::Number(-12)));
    assert_eq!(num(BinaryOp::Div, 7, 2), Ok(Value::Number(3)));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(num(BinaryOp::Div, -7, 2), Ok(Value::Number(-3)));
    assert_eq!(num(BinaryOp::Div, 7, -2), Ok(Value::Number(-3)));
}

#[test]
fn division_by_zero() {
    assert_eq!(num(BinaryOp::Div, 1, 0), Err(EvalError::DivisionByZero));
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(num(BinaryOp::Add, i32::MAX, 1), Ok(Value::Number(i32::MIN)));
    assert_eq!(num(BinaryOp::Mul, i32::MAX, 2), Ok(Value::Number(-2)));
    assert_eq!(num(BinaryOp::Div, i32::MIN, -1), Ok(Value::Number(i32::MIN)));
}

#[test]
fn comparisons() {
    assert_eq!(num(BinaryOp::Eq, 1, 1), Ok(Value::Bool(true)));
    assert_eq!(num(BinaryOp::Lt, 1, 2), Ok(Value::Bool(true)));
    assert_eq!(num(BinaryOp::Le, 2, 2), Ok(Value::Bool(true)));
    assert_eq!(num(BinaryOp::Gt, 1, 2), Ok(Value::Bool(false)));
    assert_eq!(num(BinaryOp::Ge, 1, 2), Ok(Value::Bool(false)));
}

#[test]
fn not_equal_is_unsupported() {
    assert_eq!(
        num(BinaryOp::Ne, 1, 2),
        Err(EvalError::UnsupportedOperator { op: "!=" })
    );
}

#[test]
fn boolean_operators() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(evaluate_binary(BinaryOp::And, &t, &f), Ok(Value::Bool(false)));
    assert_eq!(evaluate_binary(BinaryOp::Or, &t, &f), Ok(Value::Bool(true)));
}

#[test]
fn operand_type_mismatches() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &Value::Number(1), &Value::Bool(true)),
        Err(EvalError::TypeMismatch {
            expected: "a number",
            found: "bool"
        })
    );
    assert_eq!(
        evaluate_binary(BinaryOp::And, &Value::Unset, &Value::Bool(true)),
        Err(EvalError::TypeMismatch {
            expected: "a boolean",
            found: "unset"
        })
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Lt, &Value::Bool(true), &Value::Number(1))
            .map_err(|e| e.to_string()),
        Err("Expected a number, found `bool`".to_owned())
    );
}

proptest! {
    #[test]
    fn division_matches_truncating_integer_division(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        prop_assert_eq!(num(BinaryOp::Div, a, b), Ok(Value::Number(a.wrapping_div(b))));
        if a != i32::MIN {
            let q = num(BinaryOp::Div, a, b).ok().and_then(|v| v.as_number()).unwrap_or(0);
            prop_assert!(q.unsigned_abs() <= a.unsigned_abs());
            let r = a.wrapping_sub(q.wrapping_mul(b));
            prop_assert!(r == 0 || r.signum() == a.signum());
        }
    }

    #[test]
    fn addition_wraps_like_twos_complement(a in any::<i32>(), b in any::<i32>()) {
        let sum = num(BinaryOp::Add, a, b).ok().and_then(|v| v.as_number());
        prop_assert!(sum.is_some());
        let wide = i64::from(a) + i64::from(b);
        let diff = wide - i64::from(sum.unwrap_or_default());
        prop_assert_eq!(diff % (1_i64 << 32), 0);
    }
}
