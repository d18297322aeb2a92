//! Property-based tests for the brain parser.
//!
//! Expressions are generated as trees, rendered fully parenthesised and
//! parsed back; the parser must rebuild the same tree.

use brain_ir::{BinaryOp, Expr, StringInterner};
use brain_parse::parse_expr;
use proptest::prelude::*;

const OPS: [BinaryOp; 12] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Eq,
    BinaryOp::Ne,
    BinaryOp::Lt,
    BinaryOp::Le,
    BinaryOp::Gt,
    BinaryOp::Ge,
    BinaryOp::And,
    BinaryOp::Or,
];

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0..=i32::MAX).prop_map(Expr::Number),
        any::<bool>().prop_map(Expr::Bool),
    ];
    leaf.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (0..OPS.len(), inner.clone(), inner.clone())
                .prop_map(|(i, l, r)| Expr::binary(OPS[i], l, r)),
            inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
            inner.prop_map(|e| Expr::Not(Box::new(e))),
        ]
    })
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Bool(b) => b.to_string(),
        Expr::Binary { op, left, right } => format!("({} {op} {})", render(left), render(right)),
        Expr::Neg(e) => format!("(-{})", render(e)),
        Expr::Not(e) => format!("(not {})", render(e)),
        other => panic!("generator produced {other:?}"),
    }
}

fn parse(source: &str) -> Option<Expr> {
    let interner = StringInterner::new();
    let tokens = brain_lexer::lex(source, &interner);
    parse_expr(&tokens, &interner).ok()
}

proptest! {
    #[test]
    fn parenthesised_rendering_parses_back(expr in arb_expr()) {
        let source = render(&expr);
        prop_assert_eq!(parse(&source), Some(expr), "source: {}", source);
    }

    #[test]
    fn negative_literal_is_negation(n in 0..=i32::MAX) {
        prop_assert_eq!(
            parse(&format!("-{n}")),
            Some(Expr::Neg(Box::new(Expr::Number(n))))
        );
    }
}

#[test]
fn deeply_nested_parentheses_do_not_overflow() {
    let depth = 20_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&source), Some(Expr::Number(1)));
}

#[test]
fn deeply_nested_blocks_do_not_overflow() {
    let depth = 1_000;
    let source = format!("{}write 1{}", "{ ".repeat(depth), " }".repeat(depth));
    let interner = StringInterner::new();
    let tokens = brain_lexer::lex(&source, &interner);
    let stmts = brain_parse::parse_program(&tokens, &interner);
    assert!(stmts.is_ok_and(|s| s.len() == 1));
}
