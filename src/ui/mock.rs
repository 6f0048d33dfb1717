//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use rocm_smoke::results::TestResults;
//! use rocm_smoke::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Running runtime tests...");
//!
//! let mut results = TestResults::new();
//! results.add_test("HSA: Initialize", true, "");
//! ui.show_summary(&results);
//!
//! assert!(ui.has_message("Running runtime tests..."));
//! assert!(ui.summaries()[0].contains("Passed: 1"));
//! ```

use crate::results::TestResults;

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Records every call regardless of output mode.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    headers: Vec<String>,
    spinners: Vec<String>,
    summaries: Vec<String>,
    emitted: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Get all status lines displayed.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get every rendered summary block.
    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    /// Get everything written through `emit`.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    /// Check if a specific message was displayed.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m == msg)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
    }

    fn error(&mut self, _msg: &str) {}

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_summary(&mut self, results: &TestResults) {
        self.summaries.push(results.render_summary());
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }
}

/// Spinner that does nothing.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {}
}
