//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including diagnostic detail.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show results only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows diagnostic detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status lines (successes, warnings, headers).
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
