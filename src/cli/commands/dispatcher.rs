//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, StatsArgs};
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: AppContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the resolved context.
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    /// Get the application context.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = &self.context;
        match &cli.command {
            Some(Commands::Get(args)) => super::get::GetCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Save(args)) => {
                super::save::SaveCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Remove(args)) => {
                super::remove::RemoveCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Clear) => super::clear::ClearCommand::new(ctx).execute(ui),
            Some(Commands::Practice(args)) => {
                super::practice::PracticeCommand::new(ctx, args.command.clone()).execute(ui)
            }
            Some(Commands::Assess(args)) => {
                super::assess::AssessCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Stats(args)) => {
                super::stats::StatsCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Export(args)) => {
                super::export::ExportCommand::json(ctx, args.clone()).execute(ui)
            }
            Some(Commands::ExportCsv(args)) => {
                super::export::ExportCommand::csv(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Import(args)) => {
                super::import::ImportCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Nav(args)) => {
                super::nav::NavCommand::new(ctx, args.command.clone()).execute(ui)
            }
            Some(Commands::Session(args)) => {
                super::session::SessionCommand::new(ctx, args.command.clone()).execute(ui)
            }
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                // Default to a stats summary
                super::stats::StatsCommand::new(ctx, StatsArgs::default()).execute(ui)
            }
        }
    }
}
