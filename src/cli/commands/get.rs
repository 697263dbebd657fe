//! Get command implementation.
//!
//! The `mindfit get` command prints a stored value as JSON.

use crate::cli::args::GetArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand {
    ctx: AppContext,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(ctx: &AppContext, args: GetArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.ctx.open_store(ui);

        match manager.get(&self.args.key) {
            Some(value) => {
                ui.message(&serde_json::to_string_pretty(value)?);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("No value stored for '{}'", self.args.key));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
