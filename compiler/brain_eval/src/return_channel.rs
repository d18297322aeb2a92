//! The return channel.
//!
//! `return e` pushes a value here and every call pops at most one value once
//! its body has run. Nothing ties an entry to the call that pushed it: a
//! body that returns twice leaves its first value behind for the next call
//! to pick up, and a return outside any call waits for the next call too.

use crate::Value;

#[derive(Debug, Default)]
pub struct ReturnChannel {
    pending: Vec<Value>,
}

impl ReturnChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.pending.push(value);
    }

    /// Most recently pushed value, or `Unset` when nothing is pending.
    pub fn pop(&mut self) -> Value {
        self.pending.pop().unwrap_or(Value::Unset)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pops_in_reverse_order_then_unset() {
        let mut channel = ReturnChannel::new();
        channel.push(Value::Number(1));
        channel.push(Value::Number(2));

        assert_eq!(channel.len(), 2);
        assert_eq!(channel.pop(), Value::Number(2));
        assert_eq!(channel.pop(), Value::Number(1));
        assert_eq!(channel.pop(), Value::Unset);
        assert!(channel.is_empty());
    }
}
