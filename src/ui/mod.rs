//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for console output (colors and spinners on a TTY)
//! - [`MockUI`] capturing everything for tests
//!
//! # Example
//!
//! ```
//! use rocm_smoke::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("ROCm Package Runtime Test");
//! ui.status(StatusKind::Success, "HSA: Initialize");
//! assert_eq!(ui.statuses().len(), 1);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, is_interactive, TerminalUI};
pub use theme::{should_use_colors, SmokeTheme};

use crate::results::TestResults;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a line prefixed with a status icon.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display an error message (always shown, on stderr).
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the end-of-run summary block (always shown).
    fn show_summary(&mut self, results: &TestResults);

    /// Write machine-readable output verbatim to stdout (always shown).
    fn emit(&mut self, text: &str);

    /// Start a spinner for a potentially slow operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop the spinner and remove it from the terminal.
    fn finish_and_clear(&mut self);
}
