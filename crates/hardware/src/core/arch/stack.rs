//! Growable call stack.
//!
//! The default stack model: an unbounded LIFO of register values kept
//! outside main memory. The RAM-backed alternative is implemented on the
//! CPU itself, since it needs both the stack pointer register and memory.

/// LIFO stack of register values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallStack {
    values: Vec<u8>,
}

impl CallStack {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes a value.
    pub fn push(&mut self, val: u8) {
        self.values.push(val);
    }

    /// Pops the most recently pushed value, or `None` when empty.
    pub fn pop(&mut self) -> Option<u8> {
        self.values.pop()
    }

    /// Number of values currently on the stack.
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Discards every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
