//! Singly-linked FIFO queue fixture.
//!
//! The queue keeps handles to both ends of its chain plus a recorded size,
//! giving it three checkable rep facts: the chain is acyclic, the reachable
//! node count equals the recorded size, and walking from `front` terminates
//! exactly at the node held as `last`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rep_core::{CheckRep, CheckResult, ContainerError};

/// Shared handle to a queue node.
pub type QueueNodeRef = Rc<RefCell<QueueNode>>;

/// A single link in a queue's chain.
///
/// Fields are public: harnesses rewire chains directly to manufacture
/// broken reps.
#[derive(Debug)]
pub struct QueueNode {
    /// Held value
    pub value: i32,
    /// Node behind this one, toward the insertion end
    pub next: Option<QueueNodeRef>,
}

impl QueueNode {
    /// Create a detached node behind a shared handle.
    #[must_use]
    pub fn shared(value: i32) -> QueueNodeRef {
        Rc::new(RefCell::new(Self { value, next: None }))
    }
}

/// Linked-list queue over `i32` values.
///
/// # Example
///
/// ```rust
/// use rep_core::CheckRep;
/// use rep_fixtures::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(5);
/// queue.enqueue(7);
/// queue.dequeue().unwrap();
/// assert_eq!(queue.peek(), Ok(7));
/// assert!(queue.rep_ok());
/// ```
#[derive(Debug, Default)]
pub struct Queue {
    front: Option<QueueNodeRef>,
    last: Option<QueueNodeRef>,
    size: usize,
}

impl Queue {
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
        // `last` is overwritten unconditionally, which is what keeps the
        // stale reference left behind by a draining dequeue unobservable.
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

    /// Remove the front element.
    ///
    /// When this empties the queue, `last` keeps its reference to the
    /// removed node rather than being cleared. `enqueue` branches on `front`
    /// and overwrites `last` for every insert, so the stale handle never
    /// surfaces through the public API.
    pub fn dequeue(&mut self) -> Result<(), ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty("dequeue", "queue"));
        }
        let front = self
            .front
            .take()
            .ok_or_else(|| ContainerError::empty("dequeue", "queue"))?;
        self.front = front.borrow().next.clone();
        self.size -= 1;
        Ok(())
    }

    /// Whether the queue records zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of elements the queue records.
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

impl Drop for Queue {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl fmt::Display for Queue {
    /// Renders front to last as `O[v1, v2, ...]I`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_chain(f, &self.front)
    }
}

impl CheckRep for Queue {
    fn check_rep(&self) -> Vec<CheckResult> {
        let acyclic = check_acyclic_and_size(&self.front, self.size);
        if !acyclic.holds {
            // The front-to-last walk only terminates on an acyclic chain.
            return vec![acyclic];
        }
        vec![acyclic, check_front_reaches_last(&self.front, &self.last)]
    }
}

/// Render a queue chain as `O[v1, v2, ...]I`, front first.
pub(crate) fn format_chain(
    f: &mut fmt::Formatter<'_>,
    front: &Option<QueueNodeRef>,
) -> fmt::Result {
    write!(f, "O[")?;
    let mut current = front.clone();
    while let Some(node) = current {
        write!(f, "{}", node.borrow().value)?;
        current = node.borrow().next.clone();
        if current.is_some() {
            write!(f, ", ")?;
        }
    }
    write!(f, "]I")
}

/// Check that the chain from `front` is acyclic and holds exactly `size`
/// nodes.
///
/// Uses a full visited set rather than an early exit, so the node count in
/// the violation message is exact.
pub(crate) fn check_acyclic_and_size(front: &Option<QueueNodeRef>, size: usize) -> CheckResult {
    let mut visited: HashSet<*const RefCell<QueueNode>> = HashSet::new();
    let mut current = front.clone();
    while let Some(node) = current {
        if !visited.insert(Rc::as_ptr(&node)) {
            return CheckResult::fail(
                "AcyclicAndSizeMatches",
                format!(
                    "node holding {} is reachable twice from front",
                    node.borrow().value
                ),
            );
        }
        current = node.borrow().next.clone();
    }
    if visited.len() == size {
        CheckResult::pass("AcyclicAndSizeMatches")
    } else {
        CheckResult::fail(
            "AcyclicAndSizeMatches",
            format!(
                "chain holds {} nodes but size records {}",
                visited.len(),
                size
            ),
        )
    }
}

/// Check that walking `next` links from `front` lands exactly on the node
/// held as `last`.
///
/// Vacuously true for an empty chain; must only be called once the chain is
/// known acyclic.
pub(crate) fn check_front_reaches_last(
    front: &Option<QueueNodeRef>,
    last: &Option<QueueNodeRef>,
) -> CheckResult {
    let Some(front) = front.clone() else {
        return CheckResult::pass("FrontReachesLast");
    };
    let mut current = front;
    loop {
        let next = current.borrow().next.clone();
        match next {
            Some(node) => current = node,
            None => break,
        }
    }
    match last {
        Some(last) if Rc::ptr_eq(&current, last) => CheckResult::pass("FrontReachesLast"),
        Some(_) => CheckResult::fail(
            "FrontReachesLast",
            "chain from front does not terminate at the recorded last node".to_string(),
        ),
        None => CheckResult::fail(
            "FrontReachesLast",
            "queue is non-empty but holds no last node".to_string(),
        ),
    }
}
