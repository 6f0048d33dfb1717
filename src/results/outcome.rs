//! A single recorded test outcome.

use serde::Serialize;

/// Marker printed in front of passing outcomes in the summary.
pub const PASS_MARKER: &str = "✓ PASS";

/// Marker printed in front of failing outcomes in the summary.
pub const FAIL_MARKER: &str = "✗ FAIL";

/// A named pass/fail record with an optional descriptive message.
///
/// Outcomes are immutable once recorded; an empty message means the
/// outcome carries no message. JSON output always has a `message` key,
/// empty in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    name: String,
    passed: bool,
    message: String,
}

impl TestOutcome {
    /// Create an outcome.
    pub fn new(name: impl Into<String>, passed: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            message: message.into(),
        }
    }

    /// The outcome name (e.g. "rocBLAS: Create Handle").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the outcome passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The message, if one was recorded.
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// The summary marker for this outcome.
    pub fn marker(&self) -> &'static str {
        if self.passed {
            PASS_MARKER
        } else {
            FAIL_MARKER
        }
    }

    /// The name followed by the " - message" suffix when a message exists.
    pub fn describe(&self) -> String {
        match self.message() {
            Some(message) => format!("{} - {}", self.name, message),
            None => self.name.clone(),
        }
    }

    /// The full summary line, e.g. `✗ FAIL: B - boom`.
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.marker(), self.describe())
    }
}
