//! A LIFO stack backed by a singly linked list.
//!
//! # Examples
//!
//! ```
//! use roster::stack::Stack;
//!
//! let mut stack = Stack::new();
//! assert!(stack.is_empty());
//!
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.top(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;

type Link<T> = Option<Box<Frame<T>>>;

struct Frame<T> {
    item: T,
    below: Link<T>,
}

/// A last-in, first-out stack. Pushing prepends a frame to the list and popping removes the front
/// frame, so both are `O(1)`.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // Unlink frame by frame. The default drop would recurse once per frame.
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut frame) = head {
            head = frame.below.take();
        }
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut frame = self.head.as_deref();
        while let Some(current) = frame {
            list.entry(&current.item);
            frame = current.below.as_deref();
        }
        list.finish()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Whether there is nothing left to pop.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// How many items are on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Peeks at the most recently pushed item without removing it.
    pub fn top(&self) -> Option<&T> {
        self.head.as_ref().map(|frame| &frame.item)
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let below = self.head.take();
        self.head = Some(Box::new(Frame { item, below }));
        self.len += 1;
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|frame| {
            let Frame { item, below } = *frame;
            self.head = below;
            self.len -= 1;
            item
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        for i in 0..5 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 5);

        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn top_does_not_remove() {
        let mut stack = Stack::new();
        assert_eq!(stack.top(), None);

        stack.push("a".to_string());
        assert_eq!(stack.top().map(String::as_str), Some("a"));
        assert_eq!(stack.top().map(String::as_str), Some("a"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_empty() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn debug_lists_top_first() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }

    #[test]
    fn dropping_a_long_stack() {
        let mut stack = Stack::new();
        for i in 0..1_000_000 {
            stack.push(i);
        }
        drop(stack);
    }
}
