//! Remove command implementation.
//!
//! The `mindfit remove` command deletes a stored key.

use crate::cli::args::RemoveArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    ctx: AppContext,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(ctx: &AppContext, args: RemoveArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut manager = self.ctx.open_store(ui);
        manager.remove(&self.args.key);
        manager.close();

        ui.success(&format!("Removed '{}'", self.args.key));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::context::test_support::temp_context;
    use crate::ui::MockUI;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn remove_deletes_key() {
        let temp = TempDir::new().unwrap();
        let ctx = temp_context(&temp);
        let mut ui = MockUI::new();
        let mut manager = ctx.open_store(&mut ui);
        manager.save("userProfile", json!({"name": "Lin"}));
        manager.close();

        let result = RemoveCommand::new(
            &ctx,
            RemoveArgs {
                key: "userProfile".to_string(),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        // Known collections fall back to their default shape on reload
        assert_eq!(ctx.open_store(&mut ui).get("userProfile"), Some(&json!({})));
    }
}
