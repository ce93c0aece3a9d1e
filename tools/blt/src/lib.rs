//! Base Language Tester - golden-output conformance harness.
//!
//! Runs an external compiler over a tree of `.bl` programs and checks each
//! run against its sibling `.bl.expected` file.
//!
//! # Pipeline
//!
//! ```text
//! discover(root) ──► Discovery { tests, ignored }
//!     │
//!     ▼  (per test, sequential or on a scoped rayon pool)
//! run_test() ──► RunOutput ──► compare() ──► Verdict
//!     │
//!     ▼
//! TestSummary ──► report::print() ──► exit code
//! ```
//!
//! An expectation consisting of the single token `ERROR` declares that the
//! compiler must fail on that program, which the harness detects by the
//! compiler writing anything to its error stream.

pub mod config;
pub mod error;
pub mod report;
pub mod test;
pub mod tracing_setup;

pub use config::{HarnessConfig, DEFAULT_COMPILER, DEFAULT_TIMEOUT};
pub use error::HarnessError;
pub use test::{
    compare, discover, indicates_failure, load_expectation, matches_expectation, run_test,
    Discovery, FileRole, RunOutput, TestCase, TestHarness, TestResult, TestSummary, Verdict,
    ERROR_SENTINEL,
};
