//! Evaluator configuration.

/// Prompt written before `read` waits for a line.
pub const DEFAULT_READ_PROMPT: &str = "read> ";

/// Tunables of one [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    pub read_prompt: String,
    /// Closure calls allowed to be active at once. `None` leaves recursion
    /// bounded only by memory; the evaluator grows its stack on demand.
    pub max_call_depth: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            read_prompt: DEFAULT_READ_PROMPT.to_owned(),
            max_call_depth: None,
        }
    }
}
