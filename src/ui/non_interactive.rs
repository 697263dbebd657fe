//! Non-interactive UI for scripts and headless environments.

use std::collections::HashMap;

use crate::error::{MindFitError, Result};

use super::{parse_yes_no, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "MINDFIT_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `MINDFIT_PROMPT_<KEY>` environment variables,
/// then from `--yes` for confirmations, then from the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    assume_yes: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            assume_yes: false,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    fn answer(prompt_type: &PromptType, value: &str) -> PromptResult {
        match prompt_type {
            PromptType::Confirm => match parse_yes_no(value) {
                Some(b) => PromptResult::Bool(b),
                None => PromptResult::String(value.to_string()),
            },
            PromptType::Select { .. } => PromptResult::String(value.to_string()),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(Self::answer(&prompt.prompt_type, value));
        }

        if self.assume_yes && matches!(prompt.prompt_type, PromptType::Confirm) {
            return Ok(PromptResult::Bool(true));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(&prompt.prompt_type, default));
        }

        Err(MindFitError::PromptUnavailable {
            key: prompt.key.clone(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
