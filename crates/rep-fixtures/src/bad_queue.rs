//! Deliberately defective queue fixture.
//!
//! [`BadQueue`] mirrors [`Queue`](crate::Queue) except that `dequeue` never
//! decrements the recorded size, so the size drifts above the true node
//! count on every removal. It exists as a known-bad negative fixture for
//! invariant checkers — a checker that cannot flag it is not doing its job.
//! It is not an alternative queue and must never be used as one.

use std::rc::Rc;

use rep_core::{CheckRep, CheckResult, ContainerError};

use crate::queue::{
    check_acyclic_and_size, check_front_reaches_last, format_chain, QueueNode, QueueNodeRef,
};

/// Linked-list queue whose recorded size overcounts after any dequeue.
///
/// Same chain layout and check surface as [`Queue`](crate::Queue); only the
/// dequeue bookkeeping is (intentionally) wrong.
#[derive(Debug, Default)]
pub struct BadQueue {
    front: Option<QueueNodeRef>,
    last: Option<QueueNodeRef>,
    size: usize,
}

impl BadQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            front: None,
            last: None,
            size: 0,
        }
    }

    /// Append a value at the insertion end. Always succeeds.
    pub fn enqueue(&mut self, elem: i32) {
        let node = QueueNode::shared(elem);
        if self.front.is_none() {
            self.front = Some(Rc::clone(&node));
        } else {
            debug_assert!(self.last.is_some(), "non-empty queue must hold a last node");
            if let Some(last) = &self.last {
                last.borrow_mut().next = Some(Rc::clone(&node));
            }
        }
        self.last = Some(node);
        self.size += 1;
    }

    /// Read the front value without removing it.
    pub fn peek(&self) -> Result<i32, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("peek", "queue"));
        }
        self.front
            .as_ref()
            .map(|front| front.borrow().value)
            .ok_or_else(|| ContainerError::empty("peek", "queue"))
    }

    /// Remove the front element — without adjusting the recorded size.
    ///
    /// The missing decrement is the defect this fixture exists to exhibit.
    /// Once the chain is shorter than the recorded size, a dequeue can find
    /// no front node even though `is_empty` reports elements; that case
    /// surfaces as the same empty-container error.
    pub fn dequeue(&mut self) -> Result<(), ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("dequeue", "queue"));
        }
        let front = self
            .front
            .take()
            .ok_or_else(|| ContainerError::empty("dequeue", "queue"))?;
        self.front = front.borrow().next.clone();
        Ok(())
    }

    /// Whether the queue records zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of elements the queue records, which drifts after dequeues.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn unlink_all(&mut self) {
        self.last = None;
        let mut current = self.front.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }
}

impl Drop for BadQueue {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl std::fmt::Display for BadQueue {
    /// Renders front to last as `O[v1, v2, ...]I`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_chain(f, &self.front)
    }
}

impl CheckRep for BadQueue {
    fn check_rep(&self) -> Vec<CheckResult> {
        let acyclic = check_acyclic_and_size(&self.front, self.size);
        if !acyclic.holds {
            return vec![acyclic];
        }
        vec![acyclic, check_front_reaches_last(&self.front, &self.last)]
    }
}
