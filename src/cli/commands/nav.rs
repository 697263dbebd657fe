//! Nav command implementation.
//!
//! The `mindfit nav` subcommands start, resume, and complete practices.
//! Page URLs are printed to stdout for the caller to open.

use crate::cli::args::NavCommands;
use crate::cli::context::AppContext;
use crate::error::{MindFitError, Result};
use crate::navigation::{practice_type_from_url, CompletionData, StartOutcome};
use crate::ui::{format_minutes, format_relative_time, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The nav command implementation.
pub struct NavCommand {
    ctx: AppContext,
    command: NavCommands,
}

impl NavCommand {
    /// Create a new nav command.
    pub fn new(ctx: &AppContext, command: NavCommands) -> Self {
        Self {
            ctx: ctx.clone(),
            command,
        }
    }

    fn report(outcome: StartOutcome, ui: &mut dyn UserInterface) -> CommandResult {
        match outcome {
            StartOutcome::Started { .. } => CommandResult::success(),
            StartOutcome::Resumed { .. } => {
                ui.message("Resumed the unfinished practice.");
                CommandResult::success()
            }
            StartOutcome::Unavailable => CommandResult::failure(1),
            StartOutcome::Declined => {
                ui.message("Practice not started.");
                CommandResult::success()
            }
        }
    }
}

impl Command for NavCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let NavCommands::PageType { url } = &self.command {
            return Ok(match practice_type_from_url(url) {
                Some(kind) => {
                    ui.message(&kind);
                    CommandResult::success()
                }
                None => CommandResult::failure(1),
            });
        }

        let mut manager = self.ctx.open_store(ui);
        let mut nav = self.ctx.navigator(&mut manager);

        let result = match &self.command {
            NavCommands::Routes { json } => {
                if *json {
                    ui.message(&serde_json::to_string_pretty(nav.routes())?);
                } else {
                    for route in nav.routes() {
                        ui.message(&format!("{:<24} {}", route.id, route.url()));
                    }
                }
                CommandResult::success()
            }
            NavCommands::Route { id } => match nav.route(id) {
                Some(url) => {
                    ui.message(&url);
                    CommandResult::success()
                }
                None => {
                    ui.error(&MindFitError::UnknownPractice { id: id.clone() }.to_string());
                    CommandResult::failure(1)
                }
            },
            NavCommands::Start { id } => Self::report(nav.start(id, ui)?, ui),
            NavCommands::StartSafe { id } => Self::report(nav.start_safe(id, ui)?, ui),
            NavCommands::QuickStart { id } => Self::report(nav.quick_start(id, ui)?, ui),
            NavCommands::Complete { duration, notes } => {
                let data = CompletionData {
                    duration: *duration,
                    notes: notes.clone(),
                };
                match nav.complete(data)? {
                    Some(record) => {
                        ui.success(&format!(
                            "Practice complete: {} ({})",
                            record.title,
                            format_minutes(record.duration)
                        ));
                        CommandResult::success()
                    }
                    None => {
                        ui.warning("No practice in progress");
                        CommandResult::failure(1)
                    }
                }
            }
            NavCommands::Track { id, source, url } => {
                let default_url = nav.route(id).unwrap_or_default();
                nav.track(id, source, url.as_deref().unwrap_or(&default_url))?;
                CommandResult::success()
            }
            NavCommands::Current { json } => match nav.current_practice()? {
                Some(current) if *json => {
                    ui.message(&serde_json::to_string_pretty(&current)?);
                    CommandResult::success()
                }
                Some(current) => {
                    ui.message(&format!(
                        "{} [{}], started {}",
                        current.title,
                        current.category,
                        format_relative_time(current.start_time)
                    ));
                    CommandResult::success()
                }
                None => {
                    ui.message("No practice in progress.");
                    CommandResult::success()
                }
            },
            NavCommands::PageType { .. } => CommandResult::success(),
        };

        drop(nav);
        manager.close();
        Ok(result)
    }
}
