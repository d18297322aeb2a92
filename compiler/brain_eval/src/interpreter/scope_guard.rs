//! RAII-style scope guards for Interpreter environment management.
//!
//! [`ScopedInterpreter`] opens a scope on creation and closes it when
//! dropped. It derefs to the [`Interpreter`], so code inside the scope uses
//! the guard exactly like the interpreter itself:
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.exec_seq(body);
//! } // scope closed here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that closes the scope it opened when dropped.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Open a scope that closes when the returned guard is dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }
}
