//! Assess command implementation.
//!
//! The `mindfit assess` command records an assessment result.

use serde_json::Value;

use crate::cli::args::AssessArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::store::AssessmentKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The assess command implementation.
pub struct AssessCommand {
    ctx: AppContext,
    args: AssessArgs,
}

impl AssessCommand {
    /// Create a new assess command.
    pub fn new(ctx: &AppContext, args: AssessArgs) -> Self {
        Self {
            ctx: ctx.clone(),
            args,
        }
    }
}

impl Command for AssessCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = match serde_json::from_str::<Value>(&self.args.result) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                ui.error("Assessment result must be a JSON object");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => {
                ui.error(&format!("Assessment result is not valid JSON: {}", e));
                return Ok(CommandResult::failure(2));
            }
        };

        let kind: AssessmentKind = match self.args.kind.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        };

        let mut manager = self.ctx.open_store(ui);
        let record = manager.add_assessment(kind, result);
        manager.close();

        let id = record.get("id").and_then(Value::as_str).unwrap_or_default();
        ui.success(&format!(
            "Recorded assessment in {} ({})",
            kind.collection().key(),
            id
        ));
        Ok(CommandResult::success())
    }
}
