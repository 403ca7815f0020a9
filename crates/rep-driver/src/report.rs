//! Serializable run reports.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::runner::RunOutcome;
use crate::Fixture;

/// Errors from report encoding and writing.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Full record of one driver run, suitable for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Fixture that was driven
    pub fixture: Fixture,
    /// Seed the script was generated from
    pub seed: u64,
    /// Operations generated for the script
    pub ops_generated: usize,
    /// Operations applied before the run ended
    pub ops_executed: usize,
    /// Whether every rep check passed
    pub rep_held: bool,
    /// First broken invariant, if any
    pub violation: Option<crate::runner::Violation>,
}

impl RunReport {
    /// Assemble a report from a run outcome.
    #[must_use]
    pub fn new(fixture: Fixture, seed: u64, ops_generated: usize, outcome: RunOutcome) -> Self {
        debug_assert!(outcome.ops_executed <= ops_generated);

        Self {
            fixture,
            seed,
            ops_generated,
            ops_executed: outcome.ops_executed,
            rep_held: outcome.rep_held(),
            violation: outcome.violation,
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DriverError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON encoding to a file.
    pub fn write_json(&self, path: &Path) -> Result<(), DriverError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Format a one-paragraph human-readable summary.
    #[must_use]
    pub fn format_summary(&self) -> String {
        match &self.violation {
            None => format!(
                "{}: rep held across {} ops (seed {})",
                self.fixture.name(),
                self.ops_executed,
                self.seed
            ),
            Some(violation) => format!(
                "{}: rep broken at step {} by {} — [FAIL] {}: {} (seed {})",
                self.fixture.name(),
                violation.step,
                violation.op,
                violation.invariant,
                violation.detail,
                self.seed
            ),
        }
    }
}
