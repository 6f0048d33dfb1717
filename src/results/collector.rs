//! Ordered collection of test outcomes.
//!
//! [`TestResults`] is created once per run, handed to every probe by
//! mutable reference, and consulted at the end for the summary and the
//! exit code. Counts are kept incrementally so that
//! `passed + failed == total` holds after every `add_test`.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use super::outcome::TestOutcome;

/// Horizontal rule used by the banner and the summary block.
pub const RULE: &str = "========================================";

/// Accumulates named pass/fail outcomes in insertion order.
#[derive(Debug, Default)]
pub struct TestResults {
    tests: Vec<TestOutcome>,
    passed: usize,
    failed: usize,
}

/// Serializable snapshot of a collector, used for JSON output.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    /// Number of recorded outcomes.
    pub total: usize,
    /// Number of passing outcomes.
    pub passed: usize,
    /// Number of failing outcomes.
    pub failed: usize,
    /// Outcomes in the order they were recorded.
    pub tests: &'a [TestOutcome],
}

impl TestResults {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome. An empty message means "no message".
    pub fn add_test(&mut self, name: impl Into<String>, passed: bool, message: impl Into<String>) {
        let outcome = TestOutcome::new(name, passed, message);
        tracing::debug!(
            name = outcome.name(),
            passed = outcome.passed(),
            "recorded outcome"
        );
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.tests.push(outcome);
    }

    /// Record a passing outcome without a message.
    pub fn pass(&mut self, name: impl Into<String>) {
        self.add_test(name, true, "");
    }

    /// Record a failing outcome.
    pub fn fail(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.add_test(name, false, message);
    }

    /// Total number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.tests.len()
    }

    /// Number of passing outcomes.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failing outcomes.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// All outcomes in insertion order.
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.tests
    }

    /// Process exit code: 1 if any failure was recorded, else 0.
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }

    /// Snapshot suitable for serialization.
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            total: self.total(),
            passed: self.passed,
            failed: self.failed,
            tests: &self.tests,
        }
    }

    /// Render the summary block.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Test Summary");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Total tests: {}", self.total());
        let _ = writeln!(out, "Passed: {}", self.passed);
        let _ = writeln!(out, "Failed: {}", self.failed);
        let _ = writeln!(out);
        for test in &self.tests {
            let _ = writeln!(out, "{}", test.summary_line());
        }
        let _ = writeln!(out, "{}", RULE);
        out
    }

    /// Write the summary block to `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render_summary().as_bytes())?;
        out.flush()
    }

    /// Print the summary block to stdout.
    pub fn print_summary(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_summary(&mut handle) {
            tracing::warn!("failed to write summary: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_reports_zero_and_exits_zero() {
        let results = TestResults::new();
        assert_eq!(results.total(), 0);
        assert_eq!(results.passed(), 0);
        assert_eq!(results.failed(), 0);
        assert_eq!(results.exit_code(), 0);

        let rendered = results.render_summary();
        assert!(rendered.contains("Total tests: 0\n"));
        assert!(rendered.contains("Passed: 0\n"));
        assert!(rendered.contains("Failed: 0\n"));
    }

    #[test]
    fn one_pass_one_fail() {
        let mut results = TestResults::new();
        results.add_test("A", true, "");
        results.add_test("B", false, "boom");

        assert_eq!(results.total(), 2);
        assert_eq!(results.passed(), 1);
        assert_eq!(results.failed(), 1);
        assert_eq!(results.exit_code(), 1);

        let rendered = results.render_summary();
        assert!(rendered.lines().any(|l| l == "✓ PASS: A"));
        assert!(rendered.lines().any(|l| l == "✗ FAIL: B - boom"));
    }

    #[test]
    fn pass_and_fail_shorthands() {
        let mut results = TestResults::new();
        results.pass("HSA: Initialize");
        results.fail("hipBLAS: Create Handle", "hipblasCreate failed with status 3");

        assert_eq!(results.passed(), 1);
        assert_eq!(results.failed(), 1);
        assert_eq!(results.outcomes()[0].message(), None);
        assert_eq!(
            results.outcomes()[1].summary_line(),
            "✗ FAIL: hipBLAS: Create Handle - hipblasCreate failed with status 3"
        );
        assert_eq!(results.exit_code(), 1);
    }

    #[test]
    fn counts_stay_consistent() {
        let mut results = TestResults::new();
        let pattern = [true, false, false, true, true, false, true];
        for (i, passed) in pattern.iter().enumerate() {
            results.add_test(format!("t{}", i), *passed, "");
            assert_eq!(results.passed() + results.failed(), results.total());
        }
        assert_eq!(results.passed(), 4);
        assert_eq!(results.failed(), 3);
    }

    #[test]
    fn exit_code_zero_only_without_failures() {
        let mut results = TestResults::new();
        results.add_test("a", true, "");
        results.add_test("b", true, "x");
        assert_eq!(results.exit_code(), 0);
        results.add_test("c", false, "");
        assert_eq!(results.exit_code(), 1);
    }

    #[test]
    fn summary_preserves_insertion_order() {
        let mut results = TestResults::new();
        for name in ["zeta", "alpha", "mu"] {
            results.add_test(name, true, "");
        }
        let rendered = results.render_summary();
        let zeta = rendered.find("PASS: zeta").unwrap();
        let alpha = rendered.find("PASS: alpha").unwrap();
        let mu = rendered.find("PASS: mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test]
    fn render_summary_exact_layout() {
        let mut results = TestResults::new();
        results.add_test("HSA: Initialize", true, "");
        let expected = format!(
            "\n{rule}\nTest Summary\n{rule}\nTotal tests: 1\nPassed: 1\nFailed: 0\n\n✓ PASS: HSA: Initialize\n{rule}\n",
            rule = RULE
        );
        assert_eq!(results.render_summary(), expected);
    }

    #[test]
    fn write_summary_matches_render() {
        let mut results = TestResults::new();
        results.add_test("rocFFT", false, "rocFFT library not found");
        let mut buf = Vec::new();
        results.write_summary(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), results.render_summary());
    }

    #[test]
    fn summary_snapshot_serializes_counts() {
        let mut results = TestResults::new();
        results.add_test("A", true, "");
        results.add_test("B", false, "boom");
        let json = serde_json::to_value(results.summary()).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["tests"][1]["message"], "boom");
    }
}
