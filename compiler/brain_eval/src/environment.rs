//! Environment for variable scoping in the interpreter.
//!
//! Bindings are kept per name, as a stack: declaring a name pushes a value,
//! closing the scope that declared it pops that value again and exposes
//! whatever it shadowed. Scopes themselves only record which names they
//! introduced, so closing one is a matter of popping those names.
//!
//! Lookup is dynamic. The most recent live binding of a name wins, no matter
//! which scope introduced it, which is what lets a closure body see the
//! caller's variables.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use brain_ir::Name;

use crate::Value;

/// Failure of an environment operation.
///
/// Carries the raw [`Name`]; the interpreter resolves it through the
/// interner when turning the error into a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// No live binding for the name.
    #[error("no binding for {0:?}")]
    Unbound(Name),
    /// The name was already declared in the innermost scope.
    #[error("{0:?} is already declared in this scope")]
    AlreadyDeclared(Name),
    /// The innermost scope claims the name but holds no binding for it.
    #[error("{0:?} is declared in the current scope but has no binding")]
    Corrupted(Name),
}

/// The scoped symbol table.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Vec<Value>>,
    /// Names declared in the outermost scope, which is never closed.
    global: FxHashSet<Name>,
    /// Names declared in each nested scope, innermost last.
    nested: Vec<FxHashSet<Name>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open scopes, the outermost included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    pub fn push_scope(&mut self) {
        self.nested.push(FxHashSet::default());
        tracing::trace!(depth = self.depth(), "open scope");
    }

    /// Close the innermost scope, dropping one binding for every name it
    /// declared. The outermost scope stays open.
    pub fn pop_scope(&mut self) {
        let Some(names) = self.nested.pop() else {
            tracing::trace!("close scope ignored at the outermost scope");
            return;
        };
        for name in &names {
            if let Some(stack) = self.bindings.get_mut(name) {
                stack.pop();
                if stack.is_empty() {
                    self.bindings.remove(name);
                }
            }
        }
        tracing::trace!(depth = self.depth(), released = names.len(), "close scope");
    }

    /// Declare `name` in the innermost scope.
    pub fn bind(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        if !self.current_mut().insert(name) {
            return Err(ScopeError::AlreadyDeclared(name));
        }
        self.bindings.entry(name).or_default().push(value);
        Ok(())
    }

    /// Replace the live binding of `name`, wherever it was declared.
    pub fn rebind(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        match self.bindings.get_mut(&name).and_then(|stack| stack.last_mut()) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ScopeError::Unbound(name)),
        }
    }

    /// The live binding of `name`.
    pub fn lookup(&self, name: Name) -> Result<&Value, ScopeError> {
        let live = self.bindings.get(&name).and_then(|stack| stack.last());
        match live {
            Some(value) => Ok(value),
            None if self.current().contains(&name) => Err(ScopeError::Corrupted(name)),
            None => Err(ScopeError::Unbound(name)),
        }
    }

    pub fn is_bound(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    fn current(&self) -> &FxHashSet<Name> {
        self.nested.last().unwrap_or(&self.global)
    }

    fn current_mut(&mut self) -> &mut FxHashSet<Name> {
        self.nested.last_mut().unwrap_or(&mut self.global)
    }
}
