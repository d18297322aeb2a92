//! Abstract syntax tree.
//!
//! Closed enums, one variant per node kind. A statement's successor is simply
//! the next element of the slice that holds it; the end of the slice
//! terminates the sequence.

use std::fmt;
use std::rc::Rc;

use crate::{Name, StringInterner};

/// A statement sequence.
///
/// Shared rather than owned so that a closure can point at the body of the
/// lambda that produced it.
pub type Body = Rc<[Stmt]>;

/// Binary operators, grouped into families by [`BinaryOp::family`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// Operand and result typing of a [`BinaryOp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpFamily {
    /// Numbers in, number out.
    Arithmetic,
    /// Numbers in, boolean out.
    Comparison,
    /// Booleans in, boolean out.
    Boolean,
}

impl BinaryOp {
    pub fn family(self) -> OpFamily {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => OpFamily::Arithmetic,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => OpFamily::Comparison,
            BinaryOp::And | BinaryOp::Or => OpFamily::Boolean,
        }
    }

    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `lambda param { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub param: Name,
    pub body: Body,
}

/// Expressions produce exactly one value when evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Ident(Name),
    Number(i32),
    Bool(bool),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary minus.
    Neg(Box<Expr>),
    /// Logical not.
    Not(Box<Expr>),
    /// Read an integer from the input source.
    Read,
    /// Publish a value on the return channel.
    Return(Box<Expr>),
    Lambda(Lambda),
    /// `callee @ arg`
    Call {
        callee: Box<Expr>,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, arg: Expr) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arg: Box::new(arg),
        }
    }

    pub fn lambda(param: Name, body: impl Into<Body>) -> Self {
        Expr::Lambda(Lambda {
            param,
            body: body.into(),
        })
    }

    pub fn ret(value: Expr) -> Self {
        Expr::Return(Box::new(value))
    }
}

/// Statements perform effects; execution then continues with the next
/// statement of the enclosing sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `;`
    Empty,
    /// `{ ... }`, runs its body in a fresh scope.
    Block(Body),
    If {
        cond: Expr,
        then_branch: Body,
        else_branch: Option<Body>,
    },
    While {
        cond: Expr,
        body: Body,
    },
    /// `new name := value`
    Declare {
        name: Name,
        value: Expr,
    },
    /// `name := value`
    Assign {
        name: Name,
        value: Expr,
    },
    Write(Expr),
    /// An expression evaluated for its side effects.
    Expr(Expr),
}

/// The accumulated top-level statement sequence of a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    stmts: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly parsed fragment, returning just the new statements.
    pub fn append(&mut self, fragment: impl IntoIterator<Item = Stmt>) -> &[Stmt] {
        let start = self.stmts.len();
        self.stmts.extend(fragment);
        &self.stmts[start..]
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Borrowed view of any tree node, for labels and generic traversal.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    /// A nested statement sequence, tagged with its role (`body`, `then`, ...).
    Seq(&'static str, &'a [Stmt]),
    /// A name in binding position: a declared variable or a lambda parameter.
    Binder(Name),
}

impl<'a> NodeRef<'a> {
    /// Human-readable description of the node.
    pub fn label(&self, interner: &StringInterner) -> String {
        match self {
            NodeRef::Expr(expr) => expr_label(expr, interner),
            NodeRef::Stmt(stmt) => stmt_label(stmt).to_owned(),
            NodeRef::Seq(role, stmts) => match stmts.len() {
                1 => format!("Sequence `{role}` (1 statement)"),
                n => format!("Sequence `{role}` ({n} statements)"),
            },
            NodeRef::Binder(name) => format!("Identifier `{}`", interner.lookup(*name)),
        }
    }

    /// Ordered child nodes.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Expr(expr) => expr_children(expr),
            NodeRef::Stmt(stmt) => stmt_children(stmt),
            NodeRef::Seq(_, stmts) => stmts.iter().map(NodeRef::Stmt).collect(),
            NodeRef::Binder(_) => Vec::new(),
        }
    }
}

fn expr_label(expr: &Expr, interner: &StringInterner) -> String {
    match expr {
        Expr::Ident(name) => format!("Identifier `{}`", interner.lookup(*name)),
        Expr::Number(n) => format!("Number `{n}`"),
        Expr::Bool(b) => format!("Boolean `{b}`"),
        Expr::Binary { op, .. } => {
            let kind = match op.family() {
                OpFamily::Arithmetic => "ArithmeticOp",
                OpFamily::Comparison => "ComparisonOp",
                OpFamily::Boolean => "BooleanOp",
            };
            format!("{kind} `<left> {op} <right>`")
        }
        Expr::Neg(_) => "NegationOp `- <expr>`".to_owned(),
        Expr::Not(_) => "NotOp `not <expr>`".to_owned(),
        Expr::Read => "Read".to_owned(),
        Expr::Return(_) => "ReturnExpr `return <expr>`".to_owned(),
        Expr::Lambda(_) => "Lambda `lambda <var> { <stmt> }`".to_owned(),
        Expr::Call { .. } => "Call `<fun> @ <arg>`".to_owned(),
    }
}

fn expr_children(expr: &Expr) -> Vec<NodeRef<'_>> {
    match expr {
        Expr::Ident(_) | Expr::Number(_) | Expr::Bool(_) | Expr::Read => Vec::new(),
        Expr::Binary { left, right, .. } => vec![NodeRef::Expr(left), NodeRef::Expr(right)],
        Expr::Neg(operand) | Expr::Not(operand) | Expr::Return(operand) => {
            vec![NodeRef::Expr(operand)]
        }
        Expr::Lambda(lambda) => vec![
            NodeRef::Binder(lambda.param),
            NodeRef::Seq("body", &lambda.body),
        ],
        Expr::Call { callee, arg } => vec![NodeRef::Expr(callee), NodeRef::Expr(arg)],
    }
}

fn stmt_label(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Empty => "EmptyStmt `;`",
        Stmt::Block(_) => "Block `{ <stmt> }`",
        Stmt::If {
            else_branch: None, ..
        } => "IfStmt `if <expr> { <stmt> }`",
        Stmt::If {
            else_branch: Some(_),
            ..
        } => "IfStmt `if <expr> { <stmt> } else { <stmt> }`",
        Stmt::While { .. } => "WhileStmt `while <expr> { <stmt> }`",
        Stmt::Declare { .. } => "DeclareStmt `new <var> := <expr>`",
        Stmt::Assign { .. } => "AssignStmt `<var> := <expr>`",
        Stmt::Write(_) => "Write `write <expr>`",
        Stmt::Expr(_) => "ExprStmt `<expr>`",
    }
}

fn stmt_children(stmt: &Stmt) -> Vec<NodeRef<'_>> {
    match stmt {
        Stmt::Empty => Vec::new(),
        Stmt::Block(body) => vec![NodeRef::Seq("body", body)],
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let mut children = vec![NodeRef::Expr(cond), NodeRef::Seq("then", then_branch)];
            if let Some(else_branch) = else_branch {
                children.push(NodeRef::Seq("else", else_branch));
            }
            children
        }
        Stmt::While { cond, body } => vec![NodeRef::Expr(cond), NodeRef::Seq("body", body)],
        Stmt::Declare { name, value } | Stmt::Assign { name, value } => {
            vec![NodeRef::Binder(*name), NodeRef::Expr(value)]
        }
        Stmt::Write(value) | Stmt::Expr(value) => vec![NodeRef::Expr(value)],
    }
}

#[cfg(test)]
mod tests;
