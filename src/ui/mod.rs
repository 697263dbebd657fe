//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait, the capability the store and navigator use to
//!   show notices and ask for confirmation
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for scripts and headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use mindfit::ui::{confirm, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("clear_all_data", "yes");
//!
//! assert!(confirm(&mut ui, "clear_all_data", "Clear everything?", false).unwrap());
//! ```

pub mod format;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use format::{format_minutes, format_relative_time};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, MindFitTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from select or a scripted answer.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Interpret as a yes/no answer.
    ///
    /// Strings such as `yes`, `y`, `true` and `1` count as yes.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::String(s) => parse_yes_no(s),
        }
    }
}

/// Parse a scripted yes/no answer.
pub(crate) fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question, falling back to `default` on an unclear answer.
pub fn confirm(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
    default: bool,
) -> Result<bool> {
    let prompt = Prompt {
        key: key.to_string(),
        question: question.to_string(),
        prompt_type: PromptType::Confirm,
        default: Some(default.to_string()),
    };
    Ok(ui.prompt(&prompt)?.as_bool().unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(
            PromptResult::String("resume".to_string()).as_string(),
            "resume"
        );
    }

    #[test]
    fn prompt_result_as_bool() {
        assert_eq!(PromptResult::Bool(false).as_bool(), Some(false));
        assert_eq!(PromptResult::String("Yes".to_string()).as_bool(), Some(true));
        assert_eq!(PromptResult::String("n".to_string()).as_bool(), Some(false));
        assert_eq!(PromptResult::String("maybe".to_string()).as_bool(), None);
    }

    #[test]
    fn confirm_uses_scripted_answer() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("go", "yes");
        assert!(confirm(&mut ui, "go", "Go?", false).unwrap());
        assert_eq!(ui.prompts_shown(), &["go".to_string()]);
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = MockUI::new();
        assert!(confirm(&mut ui, "go", "Go?", true).unwrap());
        assert!(!confirm(&mut ui, "stop", "Stop?", false).unwrap());
    }

    #[test]
    fn prompt_type_select_stores_options() {
        let prompt_type = PromptType::Select {
            options: vec![PromptOption {
                label: "Resume".to_string(),
                value: "resume".to_string(),
            }],
        };

        if let PromptType::Select { options } = prompt_type {
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].value, "resume");
        } else {
            panic!("Expected Select variant");
        }
    }
}
