//! Console UI.

use console::Term;
use std::io::Write;

use crate::results::TestResults;

use super::{
    should_use_colors, OutputMode, ProgressSpinner, SmokeTheme, SpinnerHandle, StatusKind,
    UserInterface,
};

/// Console UI implementation.
///
/// Spinners are only drawn in interactive sessions; in CI logs they would
/// only add noise.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SmokeTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, interactive: bool) -> Self {
        let theme = if should_use_colors() {
            SmokeTheme::new()
        } else {
            SmokeTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            interactive,
        }
    }
}

/// Whether stdout is a terminal and we are not running under CI.
pub fn is_interactive() -> bool {
    std::env::var_os("CI").is_none() && Term::stdout().is_term()
}

/// Create the console UI for the given mode.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, interactive))
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_summary(&mut self, results: &TestResults) {
        results.print_summary();
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.interactive && self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}
