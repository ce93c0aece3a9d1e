//! Test harness infrastructure.
//!
//! This module provides:
//! - Test discovery: finding `.bl` programs and counting ignored ones
//! - Test execution: invoking the compiler with captured output
//! - Comparison: checking a run against its golden expectation
//! - Result tracking: collecting verdicts in discovery order
//! - Parallel execution: running cases concurrently with rayon


pub use comparator::{
    compare, indicates_failure, load_expectation, matches_expectation, Verdict, ERROR_SENTINEL,
};
pub use discovery::{discover, Discovery, FileRole, TestCase};
pub use harness::TestHarness;
pub use result::{TestResult, TestSummary};
pub use runner::{run_test, RunOutput};
