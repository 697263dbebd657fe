//! Command-line interface for MindFit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`context`] - Store and navigator wiring from resolved config

pub mod args;
pub mod commands;
pub mod context;

pub use args::{
    AssessArgs, Cli, Commands, CompletionsArgs, ConfigArgs, ExportArgs, GetArgs, ImportArgs,
    NavArgs, NavCommands, PracticeArgs, PracticeCommands, RemoveArgs, SaveArgs, SessionArgs,
    SessionCommands, StatsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use context::{AppContext, StdoutLauncher};
