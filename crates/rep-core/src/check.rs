//! The rep-check hook harnesses discover and invoke.
//!
//! Invariant-checking harnesses validate a container's internal
//! representation after every mutating call. [`CheckRep`] is the
//! registration point for that convention: implementing it marks a type as
//! checkable and enumerates its rep invariants.

use crate::report::{CheckResult, CheckSummary};

/// Self-check predicate over a container's internal representation.
///
/// Implementations return one [`CheckResult`] per rep invariant. The check
/// must be read-only and must terminate even on a corrupted rep (e.g. a
/// cyclic chain) — a harness calls it precisely when the rep may be broken.
///
/// # Example
///
/// ```rust
/// use rep_core::{CheckRep, CheckResult};
///
/// struct Counter {
///     value: i64,
/// }
///
/// impl CheckRep for Counter {
///     fn check_rep(&self) -> Vec<CheckResult> {
///         if self.value >= 0 {
///             vec![CheckResult::pass("NonNegative")]
///         } else {
///             vec![CheckResult::fail(
///                 "NonNegative",
///                 format!("value is {}", self.value),
///             )]
///         }
///     }
/// }
///
/// let counter = Counter { value: 3 };
/// assert!(counter.rep_ok());
/// ```
pub trait CheckRep {
    /// Check all rep invariants and return results.
    ///
    /// Even passing invariants are included, except where one check's
    /// traversal is only safe after another has passed (a cyclic chain
    /// makes a find-the-last-node walk diverge); implementations may then
    /// return the failing result alone.
    fn check_rep(&self) -> Vec<CheckResult>;

    /// Check if every rep invariant holds.
    ///
    /// Convenience predicate for assertions; harnesses call this after
    /// each mutating operation.
    fn rep_ok(&self) -> bool {
        self.check_rep().iter().all(|r| r.holds)
    }

    /// Verify all invariants, returning the first failure.
    ///
    /// Useful for fail-fast driving where the first violation should stop
    /// the run.
    fn verify_rep(&self) -> Result<(), CheckResult> {
        for result in self.check_rep() {
            if !result.holds {
                return Err(result);
            }
        }
        Ok(())
    }

    /// Get a summary of all rep check results.
    fn rep_summary(&self) -> CheckSummary {
        CheckSummary::from_results(self.check_rep())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test container with an explicitly settable rep state.
    struct TestContainer {
        items: Vec<u64>,
        recorded_len: usize,
    }

    impl TestContainer {
        fn consistent(items: Vec<u64>) -> Self {
            let recorded_len = items.len();
            Self {
                items,
                recorded_len,
            }
        }

        fn corrupted(items: Vec<u64>, recorded_len: usize) -> Self {
            Self {
                items,
                recorded_len,
            }
        }
    }

    impl CheckRep for TestContainer {
        fn check_rep(&self) -> Vec<CheckResult> {
            if self.items.len() == self.recorded_len {
                vec![CheckResult::pass("LenMatches")]
            } else {
                vec![CheckResult::fail(
                    "LenMatches",
                    format!(
                        "holds {} items but records {}",
                        self.items.len(),
                        self.recorded_len
                    ),
                )]
            }
        }
    }

    #[test]
    fn test_rep_ok_on_consistent_rep() {
        let container = TestContainer::consistent(vec![1, 2, 3]);
        assert!(container.rep_ok());
        assert!(container.verify_rep().is_ok());
        assert!(container.rep_summary().all_hold());
    }

    #[test]
    fn test_verify_rep_returns_first_failure() {
        let container = TestContainer::corrupted(vec![1], 5);
        assert!(!container.rep_ok());

        let failure = container.verify_rep().unwrap_err();
        assert_eq!(failure.name, "LenMatches");
        assert!(failure.violation.unwrap().contains("records 5"));
    }
}
