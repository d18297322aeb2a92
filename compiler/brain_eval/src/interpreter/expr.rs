//! Expression evaluation.

use brain_ir::{BinaryOp, Expr, Lambda};
use brain_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::operators::evaluate_binary;
use crate::unary_operators::{evaluate_unary, UnaryOp};
use crate::{Closure, Value};

impl Interpreter {
    /// Reduce an expression to a value.
    ///
    /// Never fails: errors are reported and turn into `Unset`.
    pub fn eval(&mut self, expr: &Expr) -> Value {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Number(n) => Value::Number(*n),
            Expr::Bool(b) => Value::Bool(*b),
            Expr::Ident(name) => {
                if self.state.has_failed() {
                    return Value::Unset;
                }
                match self.env.lookup(*name) {
                    Ok(value) => value.clone(),
                    Err(err) => self.report_scope(err),
                }
            }
            Expr::Binary { op, left, right } => {
                // Both operands always run, left first: no short-circuit.
                let left = self.eval(left);
                let right = self.eval(right);
                self.eval_binary(*op, &left, &right)
            }
            Expr::Neg(operand) => {
                let value = self.eval(operand);
                self.eval_unary(UnaryOp::Neg, &value)
            }
            Expr::Not(operand) => {
                let value = self.eval(operand);
                self.eval_unary(UnaryOp::Not, &value)
            }
            Expr::Read => self.eval_read(),
            Expr::Return(value) => {
                if !self.state.has_failed() {
                    let value = self.eval(value);
                    self.state.push_return(value);
                }
                Value::Unset
            }
            Expr::Lambda(lambda) => self.eval_lambda(lambda),
            Expr::Call { callee, arg } => self.eval_call(callee, arg),
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Value, right: &Value) -> Value {
        if self.state.has_failed() {
            return Value::Unset;
        }
        match evaluate_binary(op, left, right) {
            Ok(value) => value,
            Err(err) => self.report(err),
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, value: &Value) -> Value {
        if self.state.has_failed() {
            return Value::Unset;
        }
        match evaluate_unary(op, value) {
            Ok(value) => value,
            Err(err) => self.report(err),
        }
    }

    fn eval_lambda(&self, lambda: &Lambda) -> Value {
        if self.state.has_failed() {
            return Value::Unset;
        }
        Value::Closure(Closure {
            param: lambda.param,
            body: lambda.body.clone(),
        })
    }

    /// Prompt, read one line and parse it as an integer.
    ///
    /// Anything short of a number (end of input, an I/O error, text that does
    /// not parse) gives `Unset` without touching the error flag.
    fn eval_read(&mut self) -> Value {
        if self.state.has_failed() {
            return Value::Unset;
        }
        self.print_handler.print(&self.config.read_prompt);

        let line = match self.input_handler.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("read hit end of input");
                return Value::Unset;
            }
            Err(err) => {
                tracing::debug!(error = %err, "read failed");
                return Value::Unset;
            }
        };

        match line.trim().parse::<i32>() {
            Ok(n) => Value::Number(n),
            Err(err) => {
                tracing::debug!(input = %line, error = %err, "read input is not a number");
                Value::Unset
            }
        }
    }
}
