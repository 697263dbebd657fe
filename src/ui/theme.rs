//! Visual theme and styling.

use console::Style;

/// MindFit's visual theme.
#[derive(Debug, Clone)]
pub struct MindFitTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
}

impl Default for MindFitTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MindFitTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Colored theme when the terminal supports it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
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
        format!(
            "{} {}",
            self.header.apply_to("◎"),
            self.highlight.apply_to(title)
        )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = MindFitTheme::plain().format_success("Saved");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Saved"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = MindFitTheme::plain().format_warning("Take a break");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Take a break"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = MindFitTheme::plain().format_error("Import failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Import failed"));
    }

    #[test]
    fn theme_formats_header() {
        let msg = MindFitTheme::plain().format_header("Stats");
        assert!(msg.contains("Stats"));
        assert!(msg.contains("◎"));
    }

    #[test]
    fn default_impl_matches_new() {
        assert_eq!(
            MindFitTheme::default().format_success("test"),
            MindFitTheme::new().format_success("test")
        );
    }
}
