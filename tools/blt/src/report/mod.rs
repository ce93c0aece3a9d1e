//! Human-readable test report.
//!
//! One summary line, then a block per failing test with a unified diff of
//! actual against expected output and any captured error stream.

use std::fmt::Write;

use similar::TextDiff;

use crate::test::{Discovery, TestResult, TestSummary};

const RULE: &str = "-----------------------------------------------------";
const DOUBLE_RULE: &str = "=====================================================";

/// Lines of unchanged context around each changed region.
const CONTEXT_LINES: usize = 3;

/// Line announcing what is about to run.
pub fn discovery_line(discovery: &Discovery) -> String {
    format!(
        "Found {} tests (running {}, ignoring {})",
        discovery.tests.len() + discovery.ignored,
        discovery.tests.len(),
        discovery.ignored
    )
}

/// Unified diff from actual output to expected output.
///
/// Both sides are trimmed and split into lines first. Returns an empty
/// string when they are identical.
pub fn unified_diff(actual: &str, expected: &str) -> String {
    let actual = as_lines(actual);
    let expected = as_lines(expected);

    let diff = TextDiff::from_lines(&actual, &expected);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(CONTEXT_LINES)
        .header("Output", "Expected");
    unified.to_string()
}

// Every line newline-terminated, so the diff carries no end-of-file markers.
fn as_lines(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!("{text}\n")
    }
}

/// Render the outcome of a run.
pub fn render(summary: &TestSummary, verbose: bool) -> String {
    let mut out = String::new();

    if verbose {
        for result in &summary.results {
            let status = if result.is_passed() { "PASS" } else { "FAIL" };
            let _ = writeln!(
                out,
                "  {status}: {} ({:.2?})",
                result.case.path.display(),
                result.output.duration
            );
        }
    }

    if !summary.has_failures() {
        let _ = writeln!(out, "[✔] All tests passed");
        return out;
    }

    let _ = writeln!(out, "Passed {}/{} tests", summary.passed(), summary.total());
    for result in summary.failures() {
        render_failure(&mut out, result);
    }
    let _ = writeln!(out, "[✗] Some tests failed, see above for details");
    out
}

fn render_failure(out: &mut String, result: &TestResult) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Test \"{}\" failed", result.case.path.display());
    let _ = writeln!(out, "{DOUBLE_RULE}");

    if let Some(path) = &result.verdict.missing_expectation {
        let _ = writeln!(out, "Expected output file not found: {}", path.display());
    }

    out.push_str(&unified_diff(&result.output.stdout, &result.verdict.expected));

    if !result.output.stderr.is_empty() {
        let _ = writeln!(out, "Error:");
        let _ = writeln!(out, "{}", result.output.stderr.trim_end());
    }
    let _ = writeln!(out, "{RULE}");
}

/// Print the report for `summary` to stdout.
pub fn print(summary: &TestSummary, verbose: bool) {
    print!("{}", render(summary, verbose));
}
