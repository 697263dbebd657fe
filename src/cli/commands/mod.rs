//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`mindfit stats`, `mindfit nav start`)
//! - Shared store and navigator wiring through [`AppContext`](crate::cli::AppContext)
//! - Consistent global flag handling

pub mod assess;
pub mod clear;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod get;
pub mod import;
pub mod nav;
pub mod practice;
pub mod remove;
pub mod save;
pub mod session;
pub mod stats;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
