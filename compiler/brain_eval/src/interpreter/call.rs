//! Closure application.

use brain_ir::Expr;

use super::Interpreter;
use crate::{Closure, EvalError, Value};

impl Interpreter {
    /// `callee @ arg`
    ///
    /// The callee runs first, then the argument, both in the caller's scope.
    /// A failed argument still enters the closure: the body is skipped but
    /// one pending return value is consumed.
    pub(super) fn eval_call(&mut self, callee: &Expr, arg: &Expr) -> Value {
        if self.state.has_failed() {
            return Value::Unset;
        }
        let closure = match self.eval(callee) {
            Value::Closure(closure) => closure,
            _ if self.state.has_failed() => return Value::Unset,
            _ => return self.report(EvalError::CallNonFunction),
        };
        let arg = self.eval(arg);
        self.apply_closure(&closure, arg)
    }

    /// Run `closure` with its parameter bound to `arg` in a fresh scope.
    ///
    /// The result is whatever sits on top of the return channel once the
    /// body has run, taken before the scope closes.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.call_depth))]
    pub fn apply_closure(&mut self, closure: &Closure, arg: Value) -> Value {
        if let Err(err) = self.check_recursion_limit() {
            return self.report(err);
        }

        let mut scoped = self.scoped();
        scoped.call_depth += 1;
        if let Err(err) = scoped.env.bind(closure.param, arg) {
            scoped.report_scope(err);
        }
        scoped.exec_seq(&closure.body);
        let result = scoped.state.pop_return();
        scoped.call_depth -= 1;
        result
    }

    pub(crate) fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if let Some(max_depth) = self.config.max_call_depth {
            if self.call_depth >= max_depth {
                return Err(EvalError::RecursionLimit { max_depth });
            }
        }
        Ok(())
    }
}
