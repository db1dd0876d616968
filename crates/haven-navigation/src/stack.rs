//! Back/forward navigation stack
//!
//! Ordered addresses visited via direct submission, with a cursor. Pushing
//! truncates any forward entries past the cursor; back and forward clamp
//! at the bounds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavStack {
    entries: Vec<String>,
    /// Cursor into `entries`; `None` until the first push.
    index: Option<usize>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directly submitted address: drop the forward slice, append
    /// and advance the cursor.
    pub fn push(&mut self, address: impl Into<String>) {
        let keep = self.index.map(|i| i + 1).unwrap_or(0);
        self.entries.truncate(keep);
        self.entries.push(address.into());
        self.index = Some(self.entries.len() - 1);
    }

    /// The address under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        self.index.map(|i| i > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.index
            .map(|i| i + 1 < self.entries.len())
            .unwrap_or(false)
    }

    /// Move the cursor back and return the new current address. `None` at
    /// the start of the stack (the move is a no-op).
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }

        let i = self.index.unwrap_or(0) - 1;
        self.index = Some(i);
        self.entries.get(i).map(String::as_str)
    }

    /// Move the cursor forward and return the new current address. `None`
    /// at the end of the stack (the move is a no-op).
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }

        let i = self.index.unwrap_or(0) + 1;
        self.index = Some(i);
        self.entries.get(i).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack_cannot_move() {
        let mut stack = NavStack::new();
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
        assert!(stack.back().is_none());
        assert!(stack.forward().is_none());
        assert!(stack.current().is_none());
    }

    #[test]
    fn test_push_advances_cursor() {
        let mut stack = NavStack::new();
        stack.push("a.com");
        stack.push("b.com");

        assert_eq!(stack.current(), Some("b.com"));
        assert!(stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_back_is_noop_at_start() {
        let mut stack = NavStack::new();
        stack.push("a.com");

        assert!(stack.back().is_none());
        assert_eq!(stack.current(), Some("a.com"));
    }

    #[test]
    fn test_forward_is_noop_at_end() {
        let mut stack = NavStack::new();
        stack.push("a.com");
        stack.push("b.com");

        assert!(stack.forward().is_none());
        assert_eq!(stack.current(), Some("b.com"));
    }

    #[test]
    fn test_back_and_forward_walk_entries() {
        let mut stack = NavStack::new();
        stack.push("a.com");
        stack.push("b.com");
        stack.push("c.com");

        assert_eq!(stack.back(), Some("b.com"));
        assert_eq!(stack.back(), Some("a.com"));
        assert_eq!(stack.forward(), Some("b.com"));
        assert_eq!(stack.forward(), Some("c.com"));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut stack = NavStack::new();
        stack.push("a.com");
        stack.push("b.com");
        stack.push("c.com");

        stack.back();
        stack.back();
        stack.push("d.com");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current(), Some("d.com"));
        assert!(!stack.can_go_forward());
        assert_eq!(stack.back(), Some("a.com"));
    }
}
