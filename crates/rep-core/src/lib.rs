//! # rep-core
//!
//! Core checking surface for representation-invariant-checked container
//! fixtures.
//!
//! Test-generation harnesses drive the fixtures in `rep-fixtures` through
//! their public operations and validate the internal representation after
//! every mutating call. This crate defines that contract:
//!
//! - [`CheckRep`]: the discoverable self-check hook a harness invokes after
//!   each mutation
//! - [`CheckResult`] / [`CheckSummary`]: structured per-invariant outcomes
//! - [`ContainerError`]: the single error kind the fixtures raise
//!
//! The rep checks are not part of normal control flow. A fixture functions
//! without them; they exist so a harness can judge it consistent or broken.

pub mod check;
pub mod error;
pub mod report;

pub use check::CheckRep;
pub use error::ContainerError;
pub use report::{CheckResult, CheckSummary};
