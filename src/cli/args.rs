//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// MindFit - local data store and practice navigation.
#[derive(Debug, Parser)]
#[command(name = "mindfit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.mindfit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for the durable store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Session name for the ephemeral store
    #[arg(long, global = true)]
    pub session: Option<String>,

    /// Keep data in the session store only
    #[arg(long, global = true)]
    pub no_durable: bool,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a stored value
    Get(GetArgs),

    /// Store a JSON value under a key
    Save(SaveArgs),

    /// Delete a stored key
    Remove(RemoveArgs),

    /// Delete all data after confirmation
    Clear,

    /// Record and list practices
    Practice(PracticeArgs),

    /// Record an assessment result
    Assess(AssessArgs),

    /// Show practice and assessment totals (default if no command specified)
    Stats(StatsArgs),

    /// Export all data as JSON
    Export(ExportArgs),

    /// Export practice history as CSV
    ExportCsv(ExportArgs),

    /// Merge a JSON export into the store
    Import(ImportArgs),

    /// Start, resume, and complete practices
    Nav(NavArgs),

    /// Manage the ephemeral session
    Session(SessionArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Key to read
    pub key: String,
}

/// Arguments for the `save` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SaveArgs {
    /// Key to write
    pub key: String,

    /// JSON value
    pub value: String,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Key to delete
    pub key: String,
}

/// Arguments for the `practice` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PracticeArgs {
    #[command(subcommand)]
    pub command: PracticeCommands,
}

/// Practice subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PracticeCommands {
    /// Record a completed practice
    Add(PracticeAddArgs),

    /// List recorded practices
    List(PracticeListArgs),
}

/// Arguments for `practice add`.
#[derive(Debug, Clone, clap::Args)]
pub struct PracticeAddArgs {
    /// Practice title
    #[arg(long)]
    pub title: String,

    /// Practice category
    #[arg(long)]
    pub category: String,

    /// Minutes practiced
    #[arg(long)]
    pub duration: f64,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `practice list`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PracticeListArgs {
    /// Show only the most recent N practices
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `assess` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AssessArgs {
    /// Assessment type: bmi, anxiety, or anything else for general
    pub kind: String,

    /// Result as a JSON object
    pub result: String,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` and `export-csv` commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExportArgs {
    /// Output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// JSON export to merge
    pub file: PathBuf,
}

/// Arguments for the `nav` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NavArgs {
    #[command(subcommand)]
    pub command: NavCommands,
}

/// Navigation subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum NavCommands {
    /// List every routed practice
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the page URL for a practice
    Route { id: String },

    /// Open a practice
    Start { id: String },

    /// Open a practice, offering to resume an unfinished one first
    StartSafe { id: String },

    /// Open a practice after a readiness check
    QuickStart { id: String },

    /// Complete the practice in progress
    Complete {
        /// Minutes practiced (defaults to elapsed time)
        #[arg(long)]
        duration: Option<f64>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record a navigation event
    Track {
        id: String,

        /// Where the navigation came from
        #[arg(long, default_value = "practice_list")]
        source: String,

        /// Page the navigation happened on
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the practice in progress
    Current {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the practice type encoded in a page URL
    PageType { url: String },
}

/// Arguments for the `session` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommands,
}

/// Session subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SessionCommands {
    /// Discard the ephemeral store for the current session
    End,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output as YAML (default)
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
