//! Config command implementation.
//!
//! The `mindfit config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::cli::context::AppContext;
use crate::error::{MindFitError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    ctx: AppContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(ctx: &AppContext, args: ConfigArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.ctx.resolved();

        if let Some(path) = &resolved.config_path {
            ui.message(&format!("# {}", path.display()));
        }
        ui.message(&format!("# data dir: {}", resolved.data_dir.display()));
        ui.message(&format!("# session dir: {}", resolved.session_dir.display()));
        ui.message("");

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved.config)?;
            ui.message(&json);
        } else {
            let yaml =
                serde_yaml::to_string(&resolved.config).map_err(|e| MindFitError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
