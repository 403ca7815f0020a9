//! # rep-driver
//!
//! Seeded random operation driver for the container fixtures in
//! `rep-fixtures`.
//!
//! The driver plays the role an external test-generation harness plays for
//! these fixtures: it generates a random script of public operations,
//! applies it, and invokes the rep check after every mutating call. All
//! behavior is reproducible via a seed.
//!
//! ## Usage
//!
//! ```rust
//! use rep_driver::{run_fixture, Fixture};
//!
//! let report = run_fixture(Fixture::Stack, 12345, 200);
//! assert!(report.rep_held);
//!
//! // The deliberately defective fixture is expected to get caught.
//! let report = run_fixture(Fixture::BadQueue, 12345, 200);
//! assert!(!report.rep_held);
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a failing run:
//! ```bash
//! REP_SEED=12345 cargo run -p rep-driver --features cli --bin rep-run
//! ```

pub mod report;
pub mod rng;
pub mod runner;
pub mod script;

pub use report::{DriverError, RunReport};
pub use rng::{seed_from_env, SeedRng};
pub use runner::{RunOutcome, Violation};
pub use script::{QueueOp, StackOp};

use script::{random_queue_script, random_stack_script};

/// Fixture kinds the driver can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fixture {
    /// The working LIFO stack
    Stack,
    /// The working FIFO queue
    Queue,
    /// The deliberately defective queue (size never decremented)
    BadQueue,
}

impl Fixture {
    /// Get the name of this fixture.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Fixture::Stack => "stack",
            Fixture::Queue => "queue",
            Fixture::BadQueue => "bad-queue",
        }
    }

    /// Parse a fixture name as accepted by the CLI.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stack" => Some(Fixture::Stack),
            "queue" => Some(Fixture::Queue),
            "bad-queue" | "bad_queue" => Some(Fixture::BadQueue),
            _ => None,
        }
    }
}

/// Generate and run one random script against the given fixture.
///
/// Checks the rep after every mutating operation and stops at the first
/// violation. The same seed and op count always produce the same report.
#[must_use]
pub fn run_fixture(fixture: Fixture, seed: u64, ops_count: usize) -> RunReport {
    let mut rng = SeedRng::new(seed);

    let outcome = match fixture {
        Fixture::Stack => {
            let script = random_stack_script(&mut rng, ops_count);
            runner::run_stack(&script)
        }
        Fixture::Queue => {
            let script = random_queue_script(&mut rng, ops_count);
            runner::run_queue(&script)
        }
        Fixture::BadQueue => {
            let script = random_queue_script(&mut rng, ops_count);
            runner::run_bad_queue(&script)
        }
    };

    RunReport::new(fixture, seed, ops_count, outcome)
}
