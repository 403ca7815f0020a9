//! # rep-fixtures
//!
//! Linked-list container fixtures for invariant-checking and test-generation
//! harnesses.
//!
//! Each fixture:
//! - Exposes a small mutating API (push/pop, enqueue/dequeue) a harness can
//!   drive blindly
//! - Implements [`rep_core::CheckRep`] so the harness can validate the
//!   internal representation after every mutation
//! - Uses shared, interiorly-mutable node links (`Rc<RefCell<_>>`) so its
//!   rep *can* be broken — a fixture whose invariants are unfalsifiable by
//!   construction cannot exercise a checker
//!
//! [`BadQueue`] is a deliberately defective negative fixture, kept separate
//! from the working containers and documented as such.

pub mod bad_queue;
pub mod queue;
pub mod stack;

pub use bad_queue::BadQueue;
pub use queue::{Queue, QueueNode};
pub use stack::{Node, Stack};
