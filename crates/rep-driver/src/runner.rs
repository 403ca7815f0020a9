//! Script execution with rep checks after every mutation.
//!
//! The runner applies a script to a fresh fixture and invokes
//! [`CheckRep::verify_rep`] after each mutating operation, stopping at the
//! first broken invariant. Empty-container errors from pops, peeks, and
//! dequeues are expected outcomes, not violations.

use rep_core::{CheckRep, CheckResult, ContainerError};
use rep_fixtures::{BadQueue, Queue, Stack};
use serde::Serialize;

use crate::script::{QueueOp, StackOp};

/// A rep invariant broken during a run.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Zero-based index of the operation that broke the rep
    pub step: usize,
    /// The operation, rendered as it would be called
    pub op: String,
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of the violation
    pub detail: String,
}

impl Violation {
    fn from_failure(step: usize, op: String, failure: CheckResult) -> Self {
        debug_assert!(!failure.holds, "Violation requires a failing result");

        Self {
            step,
            op,
            invariant: failure.name,
            detail: failure
                .violation
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Outcome of driving one script against one fixture.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// Operations applied before the run ended
    pub ops_executed: usize,
    /// First broken invariant, if any
    pub violation: Option<Violation>,
}

impl RunOutcome {
    /// Whether the rep survived the whole script.
    #[must_use]
    pub fn rep_held(&self) -> bool {
        self.violation.is_none()
    }
}

/// Run a script against a fresh [`Stack`].
#[must_use]
pub fn run_stack(script: &[StackOp]) -> RunOutcome {
    let mut stack = Stack::new();
    for (step, op) in script.iter().enumerate() {
        match op {
            StackOp::Push(value) => stack.push(*value),
            StackOp::Pop => {
                let _ = stack.pop();
            }
            StackOp::Peek => {
                let _ = stack.peek();
            }
            StackOp::Clear => stack.clear(),
        }
        if op.mutates() {
            if let Err(failure) = stack.verify_rep() {
                return RunOutcome {
                    ops_executed: step + 1,
                    violation: Some(Violation::from_failure(step, op.to_string(), failure)),
                };
            }
        }
    }
    RunOutcome {
        ops_executed: script.len(),
        violation: None,
    }
}

/// Run a script against a fresh [`Queue`].
#[must_use]
pub fn run_queue(script: &[QueueOp]) -> RunOutcome {
    drive_queue(Queue::new(), script)
}

/// Run a script against a fresh [`BadQueue`].
///
/// Expected to end in a violation as soon as a dequeue succeeds.
#[must_use]
pub fn run_bad_queue(script: &[QueueOp]) -> RunOutcome {
    drive_queue(BadQueue::new(), script)
}

/// The queue surface the runner drives, shared by the working and the
/// deliberately defective fixture.
trait QueueApi: CheckRep {
    fn enqueue(&mut self, elem: i32);
    fn dequeue(&mut self) -> Result<(), ContainerError>;
    fn peek(&self) -> Result<i32, ContainerError>;
}

impl QueueApi for Queue {
    fn enqueue(&mut self, elem: i32) {
        Queue::enqueue(self, elem);
    }

    fn dequeue(&mut self) -> Result<(), ContainerError> {
        Queue::dequeue(self)
    }

    fn peek(&self) -> Result<i32, ContainerError> {
        Queue::peek(self)
    }
}

impl QueueApi for BadQueue {
    fn enqueue(&mut self, elem: i32) {
        BadQueue::enqueue(self, elem);
    }

    fn dequeue(&mut self) -> Result<(), ContainerError> {
        BadQueue::dequeue(self)
    }

    fn peek(&self) -> Result<i32, ContainerError> {
        BadQueue::peek(self)
    }
}

fn drive_queue<Q: QueueApi>(mut queue: Q, script: &[QueueOp]) -> RunOutcome {
    for (step, op) in script.iter().enumerate() {
        match op {
            QueueOp::Enqueue(value) => queue.enqueue(*value),
            QueueOp::Dequeue => {
                let _ = queue.dequeue();
            }
            QueueOp::Peek => {
                let _ = queue.peek();
            }
        }
        if op.mutates() {
            if let Err(failure) = queue.verify_rep() {
                return RunOutcome {
                    ops_executed: step + 1,
                    violation: Some(Violation::from_failure(step, op.to_string(), failure)),
                };
            }
        }
    }
    RunOutcome {
        ops_executed: script.len(),
        violation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_script_holds_rep() {
        let script = [
            StackOp::Push(1),
            StackOp::Push(2),
            StackOp::Pop,
            StackOp::Peek,
            StackOp::Pop,
            StackOp::Pop, // empty, expected error, not a violation
            StackOp::Clear,
        ];
        let outcome = run_stack(&script);
        assert!(outcome.rep_held());
        assert_eq!(outcome.ops_executed, script.len());
    }

    #[test]
    fn test_queue_script_holds_rep() {
        let script = [
            QueueOp::Enqueue(5),
            QueueOp::Enqueue(7),
            QueueOp::Dequeue,
            QueueOp::Peek,
            QueueOp::Dequeue,
            QueueOp::Dequeue, // empty, expected error
            QueueOp::Enqueue(9),
        ];
        let outcome = run_queue(&script);
        assert!(outcome.rep_held());
    }

    #[test]
    fn test_bad_queue_caught_at_first_successful_dequeue() {
        let script = [
            QueueOp::Enqueue(5),
            QueueOp::Enqueue(7),
            QueueOp::Dequeue,
            QueueOp::Enqueue(1),
        ];
        let outcome = run_bad_queue(&script);
        assert!(!outcome.rep_held());

        let violation = outcome.violation.unwrap();
        assert_eq!(violation.step, 2);
        assert_eq!(violation.op, "dequeue()");
        assert_eq!(violation.invariant, "AcyclicAndSizeMatches");
        assert_eq!(outcome.ops_executed, 3, "run stops at the violation");
    }

    #[test]
    fn test_bad_queue_clean_while_only_enqueuing() {
        let script = [QueueOp::Enqueue(1), QueueOp::Enqueue(2), QueueOp::Peek];
        let outcome = run_bad_queue(&script);
        assert!(outcome.rep_held());
    }
}
