//! Stats command implementation.
//!
//! The `mindfit stats` command shows practice and assessment totals.

use crate::cli::args::StatsArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::{format_minutes, MindFitTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::practice_line;

/// The stats command implementation.
pub struct StatsCommand {
    ctx: AppContext,
    args: StatsArgs,
}

impl StatsCommand {
    /// Create a new stats command.
    pub fn new(ctx: &AppContext, args: StatsArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.ctx.open_store(ui);
        let stats = manager.stats();

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&stats)?);
            return Ok(CommandResult::success());
        }

        let theme = MindFitTheme::detect();
        ui.show_header("MindFit");
        ui.message(&format!(
            "  {}  {}",
            theme.highlight.apply_to("Practices:"),
            stats.total_practices
        ));
        ui.message(&format!(
            "  {}    {}",
            theme.highlight.apply_to("Minutes:"),
            format_minutes(stats.total_minutes)
        ));
        ui.message(&format!(
            "  {} {}",
            theme.highlight.apply_to("Assessments:"),
            stats.assessments_count
        ));

        if let Some(last) = &stats.last_practice {
            ui.message(&format!(
                "  {}       {}",
                theme.highlight.apply_to("Last:"),
                practice_line(last)
            ));
        }

        Ok(CommandResult::success())
    }
}
