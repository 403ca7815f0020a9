//! Singly-linked LIFO stack fixture.
//!
//! The stack owns a chain of [`Node`]s from `top` downward and records its
//! element count separately, which is exactly what gives it a checkable rep:
//! the chain must be acyclic and the reachable-node count must equal the
//! recorded count.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rep_core::{CheckRep, CheckResult, ContainerError};

/// Shared handle to a stack node.
pub type NodeRef = Rc<RefCell<Node>>;

/// A single link in the stack's chain: one value plus the node below it.
///
/// The accessor/setter surface is deliberately open — harnesses build and
/// rewire nodes directly, including into states the stack's own operations
/// would never produce.
#[derive(Debug)]
pub struct Node {
    data: i32,
    next: Option<NodeRef>,
}

impl Node {
    /// Create a detached node holding `data`.
    #[must_use]
    pub fn new(data: i32) -> Self {
        Self { data, next: None }
    }

    /// Create a detached node behind a shared handle.
    #[must_use]
    pub fn shared(data: i32) -> NodeRef {
        Rc::new(RefCell::new(Self::new(data)))
    }

    /// Get the held value.
    #[must_use]
    pub fn data(&self) -> i32 {
        self.data
    }

    /// Replace the held value.
    pub fn set_data(&mut self, data: i32) {
        self.data = data;
    }

    /// Get the node below this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<NodeRef> {
        self.next.clone()
    }

    /// Replace the link to the node below.
    pub fn set_next(&mut self, next: Option<NodeRef>) {
        self.next = next;
    }
}

/// Linked-list stack over `i32` values.
///
/// # Example
///
/// ```rust
/// use rep_core::CheckRep;
/// use rep_fixtures::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.peek(), Ok(1));
/// assert!(stack.rep_ok());
/// ```
#[derive(Debug, Default)]
pub struct Stack {
    top: Option<NodeRef>,
    elements: usize,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            top: None,
            elements: 0,
        }
    }

    /// Push a value onto the top of the stack. Always succeeds.
    pub fn push(&mut self, elem: i32) {
        let new_top = Node::shared(elem);
        new_top.borrow_mut().set_next(self.top.take());
        self.top = Some(new_top);
        self.elements += 1;
    }

    /// Read the top value without removing it.
    pub fn peek(&self) -> Result<i32, ContainerError> {
        match &self.top {
            Some(top) => Ok(top.borrow().data()),
            None => Err(ContainerError::empty("peek", "stack")),
        }
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<i32, ContainerError> {
        let top = self
            .top
            .take()
            .ok_or_else(|| ContainerError::empty("pop", "stack"))?;
        let data = top.borrow().data();
        self.top = top.borrow().next();
        self.elements -= 1;
        Ok(data)
    }

    /// Whether the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements == 0
    }

    /// Number of elements the stack records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.unlink_all();
        self.elements = 0;
    }

    /// Detach every node link by link.
    ///
    /// Dropping the top handle alone would recurse down the chain; unlinking
    /// iteratively keeps long (and even cyclic) chains safe to tear down.
    fn unlink_all(&mut self) {
        let mut current = self.top.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }

    fn check_acyclic(&self) -> CheckResult {
        let mut visited: HashSet<*const RefCell<Node>> = HashSet::new();
        let mut current = self.top.clone();
        while let Some(node) = current {
            if !visited.insert(Rc::as_ptr(&node)) {
                return CheckResult::fail(
                    "Acyclic",
                    format!(
                        "node holding {} is reachable twice from top",
                        node.borrow().data()
                    ),
                );
            }
            current = node.borrow().next();
        }
        CheckResult::pass("Acyclic")
    }

    fn check_count_matches_nodes(&self) -> CheckResult {
        let mut counted: usize = 0;
        let mut current = self.top.clone();
        while let Some(node) = current {
            counted += 1;
            // Early exit once the traversal exceeds the recorded count;
            // this also bounds the walk on a cyclic chain.
            if counted > self.elements {
                return CheckResult::fail(
                    "CountMatchesNodes",
                    format!(
                        "more than the recorded {} elements are reachable from top",
                        self.elements
                    ),
                );
            }
            current = node.borrow().next();
        }
        if counted == self.elements {
            CheckResult::pass("CountMatchesNodes")
        } else {
            CheckResult::fail(
                "CountMatchesNodes",
                format!(
                    "counted {} nodes but recorded {} elements",
                    counted, self.elements
                ),
            )
        }
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl fmt::Display for Stack {
    /// Renders top to bottom as `TOP[v1, v2, ...]BOTTOM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOP[")?;
        let mut current = self.top.clone();
        while let Some(node) = current {
            write!(f, "{}", node.borrow().data())?;
            current = node.borrow().next();
            if current.is_some() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]BOTTOM")
    }
}

impl PartialEq for Stack {
    /// Structural equality: same element count and identical value sequence
    /// from top to bottom.
    fn eq(&self, other: &Self) -> bool {
        if self.elements != other.elements {
            return false;
        }
        let mut ours = self.top.clone();
        let mut theirs = other.top.clone();
        loop {
            let (a, b) = match (ours.take(), theirs.take()) {
                (Some(a), Some(b)) => (a, b),
                (None, None) => return true,
                _ => return false,
            };
            if a.borrow().data() != b.borrow().data() {
                return false;
            }
            ours = a.borrow().next();
            theirs = b.borrow().next();
        }
    }
}

impl Eq for Stack {}

impl CheckRep for Stack {
    fn check_rep(&self) -> Vec<CheckResult> {
        vec![self.check_acyclic(), self.check_count_matches_nodes()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        for value in [1, 2, 3, 4, 5] {
            stack.push(value);
            assert!(stack.rep_ok());
        }
        for expected in [5, 4, 3, 2, 1] {
            assert_eq!(stack.pop(), Ok(expected));
            assert!(stack.rep_ok());
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push(7);
        assert_eq!(stack.peek(), Ok(7));
        assert_eq!(stack.peek(), Ok(7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), Err(ContainerError::empty("peek", "stack")));
        assert_eq!(stack.pop(), Err(ContainerError::empty("pop", "stack")));
        assert_eq!(
            stack.pop().unwrap_err().to_string(),
            "pop on empty stack"
        );
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.rep_ok());
        assert_eq!(stack.to_string(), "TOP[]BOTTOM");
    }

    #[test]
    fn test_display_top_to_bottom() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.to_string(), "TOP[3, 2, 1]BOTTOM");
    }

    #[test]
    fn test_same_sequence_stacks_are_equal() {
        let mut a = Stack::new();
        let mut b = Stack::new();
        for value in [10, 20, 30] {
            a.push(value);
            b.push(value);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_values_same_length_are_unequal() {
        let mut a = Stack::new();
        let mut b = Stack::new();
        a.push(1);
        a.push(2);
        b.push(1);
        b.push(3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_push_push_pop_equals_single_push() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));

        let mut expected = Stack::new();
        expected.push(1);
        assert_eq!(stack, expected);
    }

    #[test]
    fn test_cycle_breaks_rep() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        // Rewire the bottom node back to the top.
        let top = stack.top.clone().unwrap();
        let bottom = top.borrow().next().unwrap();
        bottom.borrow_mut().set_next(Some(Rc::clone(&top)));

        assert!(!stack.rep_ok());
        let failure = stack.verify_rep().unwrap_err();
        assert_eq!(failure.name, "Acyclic");
    }

    #[test]
    fn test_count_drift_breaks_rep() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.elements = 3;

        assert!(!stack.rep_ok());
        let failure = stack.verify_rep().unwrap_err();
        assert_eq!(failure.name, "CountMatchesNodes");
        assert!(failure.violation.unwrap().contains("counted 1"));
    }

    #[test]
    fn test_extra_reachable_node_fails_early() {
        let mut stack = Stack::new();
        stack.push(1);

        // Splice in a node the count does not know about.
        let stray = Node::shared(99);
        stack.top.clone().unwrap().borrow_mut().set_next(Some(stray));

        let results = stack.check_rep();
        let count_check = results
            .iter()
            .find(|r| r.name == "CountMatchesNodes")
            .unwrap();
        assert!(!count_check.holds);
    }

    #[test]
    fn test_node_accessors() {
        let mut node = Node::new(4);
        assert_eq!(node.data(), 4);
        node.set_data(9);
        assert_eq!(node.data(), 9);
        assert!(node.next().is_none());
        node.set_next(Some(Node::shared(1)));
        assert_eq!(node.next().unwrap().borrow().data(), 1);
    }

    #[test]
    fn test_drop_tolerates_cycles() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        let top = stack.top.clone().unwrap();
        let bottom = top.borrow().next().unwrap();
        bottom.borrow_mut().set_next(Some(Rc::clone(&top)));
        drop(top);
        drop(bottom);
        // Drop must terminate despite the cycle.
        drop(stack);
    }
}
