//! Visual theme and styling.

use console::Style;

use crate::results::collector::RULE;

/// The harness's visual theme.
#[derive(Debug, Clone)]
pub struct SmokeTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for failures and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for the banner title (bold).
    pub header: Style,
    /// Style for the banner rules (dim).
    pub border: Style,
}

impl Default for SmokeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SmokeTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the banner: title framed by rules, followed by a blank line.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.border.apply_to(RULE);
        format!("{}\n{}\n{}\n", rule, self.header.apply_to(title), rule)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
