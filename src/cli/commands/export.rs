//! Export command implementations.
//!
//! `mindfit export` writes the whole store as JSON and
//! `mindfit export-csv` writes the practice history as CSV.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;

use crate::cli::args::ExportArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::transfer::{csv_file_name, export_file_name, export_json, practices_csv};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Output format for [`ExportCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// The export command implementation.
pub struct ExportCommand {
    ctx: AppContext,
    args: ExportArgs,
    format: ExportFormat,
}

impl ExportCommand {
    /// Create a JSON export command.
    pub fn json(ctx: &AppContext, args: ExportArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
            format: ExportFormat::Json,
        }
    }

    /// Create a CSV export command.
    pub fn csv(ctx: &AppContext, args: ExportArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
            format: ExportFormat::Csv,
        }
    }

    fn output_path(&self) -> PathBuf {
        self.args.output.clone().unwrap_or_else(|| {
            let now = Utc::now();
            PathBuf::from(match self.format {
                ExportFormat::Json => export_file_name(now),
                ExportFormat::Csv => csv_file_name(now),
            })
        })
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = self.ctx.open_store(ui);

        let content = match self.format {
            ExportFormat::Json => export_json(&manager)?,
            ExportFormat::Csv => match practices_csv(&manager) {
                Some(csv) => csv,
                None => {
                    ui.warning("No practice data to export");
                    return Ok(CommandResult::failure(1));
                }
            },
        };

        let path = self.output_path();
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        ui.success(&format!("Data exported to {}", path.display()));
        if self.format == ExportFormat::Json {
            ui.message("Keep this file somewhere safe.");
        }
        Ok(CommandResult::success())
    }
}
