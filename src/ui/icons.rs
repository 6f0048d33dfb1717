//! Status icons for the running log and probe listings.

use super::theme::SmokeTheme;

/// Status kinds shown in front of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed / library found.
    Success,
    /// Check failed.
    Failed,
    /// Not attempted (library not found).
    Skipped,
}

impl StatusKind {
    /// Map a pass/fail flag.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &SmokeTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &SmokeTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
