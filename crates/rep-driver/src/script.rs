//! Operation scripts for the container fixtures.
//!
//! A script is just a flat list of public operations. Weights lean toward
//! inserts so chains actually grow, but removals and reads on
//! likely-empty containers are generated on purpose: the empty-container
//! error path is part of the surface under test.

use std::fmt;

use serde::Serialize;

use crate::rng::SeedRng;

/// Range of values pushed/enqueued by random scripts.
const VALUE_MIN: i32 = -100;
const VALUE_MAX: i32 = 100;

/// One public operation on the stack fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackOp {
    Push(i32),
    Pop,
    Peek,
    Clear,
}

impl StackOp {
    /// Whether this operation mutates the stack (and so warrants a rep
    /// check afterwards).
    #[must_use]
    pub fn mutates(&self) -> bool {
        !matches!(self, StackOp::Peek)
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOp::Push(value) => write!(f, "push({})", value),
            StackOp::Pop => write!(f, "pop()"),
            StackOp::Peek => write!(f, "peek()"),
            StackOp::Clear => write!(f, "clear()"),
        }
    }
}

/// One public operation on a queue fixture (working or defective).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueOp {
    Enqueue(i32),
    Dequeue,
    Peek,
}

impl QueueOp {
    /// Whether this operation mutates the queue.
    #[must_use]
    pub fn mutates(&self) -> bool {
        !matches!(self, QueueOp::Peek)
    }
}

impl fmt::Display for QueueOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueOp::Enqueue(value) => write!(f, "enqueue({})", value),
            QueueOp::Dequeue => write!(f, "dequeue()"),
            QueueOp::Peek => write!(f, "peek()"),
        }
    }
}

/// Generate a random stack script of `ops_count` operations.
///
/// Roughly half pushes, the rest split between pops, peeks, and the
/// occasional clear.
#[must_use]
pub fn random_stack_script(rng: &mut SeedRng, ops_count: usize) -> Vec<StackOp> {
    (0..ops_count)
        .map(|_| match rng.gen_range(0..10) {
            0..=4 => StackOp::Push(rng.gen_range(VALUE_MIN..=VALUE_MAX)),
            5..=6 => StackOp::Pop,
            7..=8 => StackOp::Peek,
            _ => StackOp::Clear,
        })
        .collect()
}

/// Generate a random queue script of `ops_count` operations.
#[must_use]
pub fn random_queue_script(rng: &mut SeedRng, ops_count: usize) -> Vec<QueueOp> {
    (0..ops_count)
        .map(|_| match rng.gen_range(0..10) {
            0..=4 => QueueOp::Enqueue(rng.gen_range(VALUE_MIN..=VALUE_MAX)),
            5..=7 => QueueOp::Dequeue,
            _ => QueueOp::Peek,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_script() {
        let mut a = SeedRng::new(4242);
        let mut b = SeedRng::new(4242);
        assert_eq!(
            random_stack_script(&mut a, 500),
            random_stack_script(&mut b, 500)
        );

        let mut a = SeedRng::new(4242);
        let mut b = SeedRng::new(4242);
        assert_eq!(
            random_queue_script(&mut a, 500),
            random_queue_script(&mut b, 500)
        );
    }

    #[test]
    fn test_scripts_cover_all_op_kinds() {
        let mut rng = SeedRng::new(7);
        let script = random_stack_script(&mut rng, 1000);
        assert!(script.iter().any(|op| matches!(op, StackOp::Push(_))));
        assert!(script.contains(&StackOp::Pop));
        assert!(script.contains(&StackOp::Peek));
        assert!(script.contains(&StackOp::Clear));
    }

    #[test]
    fn test_op_display() {
        assert_eq!(StackOp::Push(3).to_string(), "push(3)");
        assert_eq!(QueueOp::Dequeue.to_string(), "dequeue()");
    }

    #[test]
    fn test_mutation_classification() {
        assert!(StackOp::Push(1).mutates());
        assert!(StackOp::Clear.mutates());
        assert!(!StackOp::Peek.mutates());
        assert!(QueueOp::Dequeue.mutates());
        assert!(!QueueOp::Peek.mutates());
    }
}
