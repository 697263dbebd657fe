//! Practice command implementation.
//!
//! `mindfit practice add` records a completed practice and
//! `mindfit practice list` shows the history.

use crate::cli::args::{PracticeAddArgs, PracticeCommands, PracticeListArgs};
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::store::PracticeEntry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::practice_line;

/// The practice command implementation.
pub struct PracticeCommand {
    ctx: AppContext,
    command: PracticeCommands,
}

impl PracticeCommand {
    /// Create a new practice command.
    pub fn new(ctx: &AppContext, command: PracticeCommands) -> Self {
        Self {
            ctx: ctx.clone(),
            command,
        }
    }

    fn add(&self, args: &PracticeAddArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !args.duration.is_finite() || args.duration < 0.0 {
            ui.error("Duration must be a non-negative number of minutes");
            return Ok(CommandResult::failure(2));
        }

        let mut manager = self.ctx.open_store(ui);
        let record = manager.add_practice_record(PracticeEntry {
            title: args.title.clone(),
            category: args.category.clone(),
            duration: args.duration,
            notes: args.notes.clone().unwrap_or_default(),
            practice_id: None,
        });
        manager.close();

        ui.success(&format!("Recorded {} ({})", record.title, record.id));
        Ok(CommandResult::success())
    }

    fn list(&self, args: &PracticeListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.ctx.open_store(ui);
        let practices = manager.practices();
        let skip = args
            .limit
            .map(|limit| practices.len().saturating_sub(limit))
            .unwrap_or(0);
        let shown = &practices[skip..];

        if args.json {
            ui.message(&serde_json::to_string_pretty(shown)?);
            return Ok(CommandResult::success());
        }

        if shown.is_empty() {
            ui.message("No practices recorded yet.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Practice History");
        for record in shown {
            ui.message(&format!("  {}", practice_line(record)));
        }
        Ok(CommandResult::success())
    }
}

impl Command for PracticeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            PracticeCommands::Add(args) => self.add(args, ui),
            PracticeCommands::List(args) => self.list(args, ui),
        }
    }
}
