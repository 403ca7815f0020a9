//! Structured results for representation-invariant checks.
//!
//! Each invariant a fixture claims to maintain produces one [`CheckResult`]
//! per check pass, so a harness can report exactly which invariant broke
//! rather than a bare boolean.

/// Result of checking a single representation invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Human-readable invariant name (e.g. "Acyclic")
    pub name: &'static str,

    /// Whether the invariant holds
    pub holds: bool,

    /// Description of the violation if the invariant doesn't hold
    pub violation: Option<String>,
}

impl CheckResult {
    /// Create a passing check result.
    #[must_use]
    pub fn pass(name: &'static str) -> Self {
        debug_assert!(!name.is_empty(), "Invariant name must not be empty");

        Self {
            name,
            holds: true,
            violation: None,
        }
    }

    /// Create a failing check result.
    #[must_use]
    pub fn fail(name: &'static str, violation: String) -> Self {
        debug_assert!(!name.is_empty(), "Invariant name must not be empty");
        debug_assert!(
            !violation.is_empty(),
            "Violation description must not be empty"
        );

        Self {
            name,
            holds: false,
            violation: Some(violation),
        }
    }

    /// Format as a single-line status for logging.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            format!("[PASS] {}", self.name)
        } else {
            format!(
                "[FAIL] {}: {}",
                self.name,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Summary of a full rep check pass over one fixture.
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Number of invariants that held
    pub passed: u64,
    /// Number of invariants that were violated
    pub failed: u64,
    /// Total invariants checked
    pub total: u64,
    /// Individual results
    pub results: Vec<CheckResult>,
}

impl CheckSummary {
    /// Aggregate a list of results into a summary.
    #[must_use]
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let passed = results.iter().filter(|r| r.holds).count() as u64;
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;

        debug_assert!(passed + failed == total);

        Self {
            passed,
            failed,
            total,
            results,
        }
    }

    /// Whether every checked invariant held.
    #[must_use]
    pub fn all_hold(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_result() {
        let result = CheckResult::pass("Acyclic");
        assert!(result.holds);
        assert!(result.violation.is_none());
        assert_eq!(result.format_status(), "[PASS] Acyclic");
    }

    #[test]
    fn test_fail_result() {
        let result = CheckResult::fail("CountMatchesNodes", "counted 3, recorded 2".to_string());
        assert!(!result.holds);
        assert_eq!(
            result.format_status(),
            "[FAIL] CountMatchesNodes: counted 3, recorded 2"
        );
    }

    #[test]
    fn test_summary_aggregates() {
        let summary = CheckSummary::from_results(vec![
            CheckResult::pass("Acyclic"),
            CheckResult::fail("FrontReachesLast", "last is stale".to_string()),
        ]);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 2);
        assert!(!summary.all_hold());
    }

    #[test]
    fn test_empty_summary_holds() {
        let summary = CheckSummary::from_results(Vec::new());
        assert!(summary.all_hold());
    }
}
