use super::*;
use crate::Expr;
use pretty_assertions::assert_eq;

#[test]
fn empty_program() {
    let interner = StringInterner::new();
    assert_eq!(print_tree(&[], &interner), "Program\n");
}

#[test]
fn nested_statements_are_indented() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let stmts = vec![
        Stmt::Declare {
            name: x,
            value: Expr::Number(1),
        },
        Stmt::Write(Expr::Ident(x)),
    ];

    let expected = "\
Program
├── DeclareStmt `new <var> := <expr>`
│   ├── Identifier `x`
│   └── Number `1`
└── Write `write <expr>`
    └── Identifier `x`
";
    assert_eq!(print_tree(&stmts, &interner), expected);
}

#[test]
fn blocks_show_their_body_sequence() {
    let interner = StringInterner::new();
    let stmts = vec![Stmt::Block(vec![Stmt::Empty].into())];

    let expected = "\
Program
└── Block `{ <stmt> }`
    └── Sequence `body` (1 statement)
        └── EmptyStmt `;`
";
    assert_eq!(print_tree(&stmts, &interner), expected);
}
