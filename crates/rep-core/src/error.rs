//! Errors raised by the container fixtures.

use thiserror::Error;

/// The single error condition in the fixture crates: a read or remove
/// operation attempted on a container with zero elements.
///
/// This signals caller misuse, not a transient failure. There is nothing to
/// retry; harnesses treat it as an expected precondition violation rather
/// than a broken rep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} on empty {container}")]
pub struct ContainerError {
    /// Operation that was attempted (e.g. "pop", "dequeue")
    pub operation: &'static str,
    /// Container kind it was attempted on (e.g. "stack", "queue")
    pub container: &'static str,
}

impl ContainerError {
    /// Create an empty-container error for the given operation.
    #[must_use]
    pub fn empty(operation: &'static str, container: &'static str) -> Self {
        debug_assert!(!operation.is_empty(), "Operation name must not be empty");
        debug_assert!(!container.is_empty(), "Container name must not be empty");

        Self {
            operation,
            container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_operation_and_container() {
        let err = ContainerError::empty("pop", "stack");
        assert_eq!(err.to_string(), "pop on empty stack");

        let err = ContainerError::empty("dequeue", "queue");
        assert_eq!(err.to_string(), "dequeue on empty queue");
    }
}
