//! Session command implementation.
//!
//! `mindfit session end` discards the ephemeral store, the way closing a
//! browser tab drops its session storage.

use crate::cli::args::SessionCommands;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The session command implementation.
pub struct SessionCommand {
    ctx: AppContext,
    command: SessionCommands,
}

impl SessionCommand {
    /// Create a new session command.
    pub fn new(ctx: &AppContext, command: SessionCommands) -> Self {
        Self {
            ctx: ctx.clone(),
            command,
        }
    }
}

impl Command for SessionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.command {
            SessionCommands::End => {
                let dir = &self.ctx.resolved().session_dir;
                if dir.exists() {
                    std::fs::remove_dir_all(dir)?;
                    tracing::debug!("Removed session store at {}", dir.display());
                }
                ui.success("Session ended");
                Ok(CommandResult::success())
            }
        }
    }
}
