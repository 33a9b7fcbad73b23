//! Visual theme and styling.

use console::Style;

use crate::lint::{Grade, Severity};

/// ctxlint's visual theme.
#[derive(Debug, Clone)]
pub struct CtxlintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for source locations and gutters (blue).
    pub location: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
    /// Style for lines added in a preview.
    pub added: Style,
    /// Style for lines removed in a preview.
    pub removed: Style,
}

impl Default for CtxlintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CtxlintTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            location: Style::new().blue(),
            hint: Style::new().cyan().dim(),
            added: Style::new().green(),
            removed: Style::new().red(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            location: Style::new(),
            hint: Style::new(),
            added: Style::new(),
            removed: Style::new(),
        }
    }

    /// The theme matching the current color setting.
    pub fn for_colors(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for an issue severity.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Error => &self.error,
            Severity::Warn => &self.warning,
            Severity::Info => &self.info,
        }
    }

    /// Style for a score grade.
    pub fn grade(&self, grade: Grade) -> &Style {
        match grade {
            Grade::A | Grade::B => &self.success,
            Grade::C | Grade::D => &self.warning,
            Grade::F => &self.error,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("◆"), self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
