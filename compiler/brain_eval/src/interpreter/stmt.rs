//! Statement execution.

use brain_ir::{Body, Expr, Name, Stmt};
use brain_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{EvalError, Value};

impl Interpreter {
    /// Execute a statement sequence in order.
    ///
    /// Statements check the error flag themselves, so a failure part way
    /// through silences the rest of the sequence without cutting it short.
    pub fn exec_seq(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.exec(stmt);
        }
    }

    pub fn exec(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.exec_inner(stmt));
    }

    fn exec_inner(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Empty => {}
            Stmt::Block(body) => self.exec_block(body),
            _ if self.state.has_failed() => {}
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval_condition(cond) {
                Some(true) => self.exec_block(then_branch),
                Some(false) => {
                    if let Some(else_branch) = else_branch {
                        self.exec_block(else_branch);
                    }
                }
                None => {}
            },
            Stmt::While { cond, body } => {
                while !self.state.has_failed() && self.eval_condition(cond) == Some(true) {
                    self.exec_block(body);
                }
            }
            Stmt::Declare { name, value } => self.exec_declare(*name, value),
            Stmt::Assign { name, value } => self.exec_assign(*name, value),
            Stmt::Write(value) => {
                let value = self.eval(value);
                if !self.state.has_failed() {
                    self.print_handler.println(&value.to_string());
                }
            }
            Stmt::Expr(expr) => {
                self.eval(expr);
            }
        }
    }

    fn exec_block(&mut self, body: &Body) {
        let mut scoped = self.scoped();
        scoped.exec_seq(body);
    }

    /// Evaluate a condition; `None` when it failed or was not a boolean.
    fn eval_condition(&mut self, cond: &Expr) -> Option<bool> {
        let value = self.eval(cond);
        if self.state.has_failed() {
            return None;
        }
        match value {
            Value::Bool(b) => Some(b),
            other => {
                self.report(EvalError::type_mismatch("a boolean", &other));
                None
            }
        }
    }

    /// A failed right-hand side still binds, to `Unset`.
    fn exec_declare(&mut self, name: Name, value: &Expr) {
        let value = self.eval(value);
        if let Err(err) = self.env.bind(name, value) {
            self.report_scope(err);
        }
    }

    fn exec_assign(&mut self, name: Name, value: &Expr) {
        let value = self.eval(value);
        if let Err(err) = self.env.rebind(name, value) {
            let err = EvalError::from_rebind(err, &self.interner);
            self.report(err);
        }
    }
}
