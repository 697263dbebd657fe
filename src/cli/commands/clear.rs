//! Clear command implementation.
//!
//! The `mindfit clear` command deletes all data after confirmation.

use crate::cli::context::AppContext;
use crate::error::Result;
use crate::store::ClearOutcome;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand {
    ctx: AppContext,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl Command for ClearCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut manager = self.ctx.open_store(ui);

        match manager.clear(ui)? {
            ClearOutcome::Cleared => {}
            ClearOutcome::Cancelled => ui.message("Nothing was deleted."),
        }

        manager.close();
        Ok(CommandResult::success())
    }
}
