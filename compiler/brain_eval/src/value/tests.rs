use brain_ir::{Body, Expr, Name, Stmt};
use pretty_assertions::assert_eq;

use super::*;

fn closure(body: &Body) -> Value {
    Value::Closure(Closure {
        param: Name::from_raw(1),
        body: Body::clone(body),
    })
}

#[test]
fn textual_forms() {
    assert_eq!(Value::Number(42).to_string(), "42");
    assert_eq!(Value::Number(-7).to_string(), "-7");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Unset.to_string(), "Unset value!");

    let body: Body = Body::from(Vec::new());
    assert_eq!(closure(&body).to_string(), "lambda expression");
}

#[test]
fn closures_compare_by_identity() {
    let body: Body = Body::from(vec![Stmt::Expr(Expr::Number(1))]);
    let twin: Body = Body::from(vec![Stmt::Expr(Expr::Number(1))]);

    assert_eq!(closure(&body), closure(&body));
    assert_ne!(closure(&body), closure(&twin));
}

#[test]
fn accessors() {
    assert_eq!(Value::from(3).as_number(), Some(3));
    assert_eq!(Value::from(true).as_number(), None);
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert!(Value::Unset.is_unset());
    assert_eq!(Value::Unset.type_name(), "unset");
}
