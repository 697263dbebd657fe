//! Import command implementation.
//!
//! The `mindfit import` command merges a JSON export into the store.

use crate::cli::args::ImportArgs;
use crate::cli::context::AppContext;
use crate::error::{MindFitError, Result};
use crate::transfer::import_file;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    ctx: AppContext,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(ctx: &AppContext, args: ImportArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut manager = self.ctx.open_store(ui);

        let summary = match import_file(&mut manager, &self.args.file) {
            Ok(summary) => summary,
            Err(e @ MindFitError::InvalidImport { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        manager.close();

        ui.success(&format!(
            "Import complete: {} merged, {} replaced",
            summary.merged.len(),
            summary.replaced.len()
        ));
        if ui.output_mode().shows_detail() {
            for key in &summary.merged {
                ui.message(&format!("  merged   {}", key));
            }
            for key in &summary.replaced {
                ui.message(&format!("  replaced {}", key));
            }
        }
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
    fn import_merges_file() {
        let temp = TempDir::new().unwrap();
        let ctx = temp_context(&temp);
        let file = temp.path().join("backup.json");
        std::fs::write(
            &file,
            json!({
                "version": "1.0",
                "exportDate": "2024-01-05T10:00:00.000Z",
                "data": {
                    "practiceHistory": [{"id": "a", "title": "Scan"}],
                    "settings": {"theme": "dark"}
                }
            })
            .to_string(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = ImportCommand::new(&ctx, ImportArgs { file })
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("1 merged, 1 replaced"));
        let manager = ctx.open_store(&mut ui);
        assert_eq!(manager.practices().len(), 1);
        assert_eq!(manager.get("settings"), Some(&json!({"theme": "dark"})));
    }

    #[test]
    fn invalid_document_is_reported() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.json");
        std::fs::write(&file, r#"{"data": {}}"#).unwrap();
        let mut ui = MockUI::new();

        let result = ImportCommand::new(&temp_context(&temp), ImportArgs { file })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("version"));
    }
}
