use super::*;
use pretty_assertions::assert_eq;

#[test]
fn operator_families() {
    assert_eq!(BinaryOp::Div.family(), OpFamily::Arithmetic);
    assert_eq!(BinaryOp::Ne.family(), OpFamily::Comparison);
    assert_eq!(BinaryOp::Or.family(), OpFamily::Boolean);
    assert_eq!(BinaryOp::Le.to_string(), "<=");
}

#[test]
fn program_append_returns_only_the_new_fragment() {
    let mut program = Program::new();
    program.append([Stmt::Empty]);
    let added = program.append([Stmt::Write(Expr::Number(1)), Stmt::Empty]);

    assert_eq!(added, &[Stmt::Write(Expr::Number(1)), Stmt::Empty]);
    assert_eq!(program.len(), 3);
}

#[test]
fn lambda_body_is_shared_not_copied() {
    let interner = StringInterner::new();
    let p = interner.intern("p");
    let Expr::Lambda(lambda) = Expr::lambda(p, vec![Stmt::Expr(Expr::ret(Expr::Ident(p)))]) else {
        panic!("expected a lambda");
    };

    let copy = lambda.clone();
    assert!(Rc::ptr_eq(&lambda.body, &copy.body));
}

#[test]
fn labels_name_identifiers_and_operators() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let sum = Expr::binary(BinaryOp::Add, Expr::Ident(x), Expr::Number(2));

    assert_eq!(NodeRef::Expr(&sum).label(&interner), "ArithmeticOp `<left> + <right>`");
    let children: Vec<String> = NodeRef::Expr(&sum)
        .children()
        .iter()
        .map(|child| child.label(&interner))
        .collect();
    assert_eq!(children, vec!["Identifier `x`", "Number `2`"]);
}

#[test]
fn if_children_include_else_only_when_present() {
    let interner = StringInterner::new();
    let without_else = Stmt::If {
        cond: Expr::Bool(true),
        then_branch: Rc::from(vec![Stmt::Empty]),
        else_branch: None,
    };
    let with_else = Stmt::If {
        cond: Expr::Bool(true),
        then_branch: Rc::from(vec![Stmt::Empty]),
        else_branch: Some(Rc::from(Vec::new())),
    };

    assert_eq!(NodeRef::Stmt(&without_else).children().len(), 2);
    let children = NodeRef::Stmt(&with_else).children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[2].label(&interner), "Sequence `else` (0 statements)");
}

#[test]
fn declare_children_start_with_the_binder() {
    let interner = StringInterner::new();
    let name = interner.intern("total");
    let stmt = Stmt::Declare {
        name,
        value: Expr::Read,
    };

    let labels: Vec<String> = NodeRef::Stmt(&stmt)
        .children()
        .iter()
        .map(|child| child.label(&interner))
        .collect();
    assert_eq!(labels, vec!["Identifier `total`", "Read"]);
}
