//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level of the source and the evaluator
//! recurses once per nested expression, block and closure call. A program such
//! as a recursive countdown closure can nest thousands of calls, each of which
//! costs several native frames. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] moves that recursion onto freshly allocated
//! stack segments instead of overflowing the thread stack.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack when less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, expr: &Expr) -> Value {
///     ensure_sufficient_stack(|| self.eval_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
