//! Save command implementation.
//!
//! The `mindfit save` command stores a JSON value under a key.

use serde_json::Value;

use crate::cli::args::SaveArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The save command implementation.
pub struct SaveCommand {
    ctx: AppContext,
    args: SaveArgs,
}

impl SaveCommand {
    /// Create a new save command.
    pub fn new(ctx: &AppContext, args: SaveArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for SaveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let value: Value = match serde_json::from_str(&self.args.value) {
            Ok(v) => v,
            Err(e) => {
                ui.error(&format!("Value is not valid JSON: {}", e));
                return Ok(CommandResult::failure(2));
            }
        };

        let mut manager = self.ctx.open_store(ui);
        manager.save(&self.args.key, value);
        manager.close();

        ui.success(&format!("Saved '{}'", self.args.key));
        Ok(CommandResult::success())
    }
}
