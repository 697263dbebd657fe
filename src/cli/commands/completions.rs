//! Shell completions generation.
//!
//! The `mindfit completions` command writes a completion script to stdout.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const BIN_NAME: &str = "mindfit";

/// Render the completion script for `shell` into `out`.
pub fn render_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut stdout = std::io::stdout().lock();
        render_completions(self.args.shell, &mut stdout);
        stdout.flush()?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        render_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_completes_nav_subcommands() {
        let output = script(Shell::Bash);
        assert!(output.contains("mindfit"));
        assert!(output.contains("start-safe"));
        assert!(output.contains("export-csv"));
    }

    #[test]
    fn zsh_completes_global_flags() {
        let output = script(Shell::Zsh);
        assert!(output.contains("--data-dir"));
        assert!(output.contains("--no-durable"));
    }

    #[test]
    fn fish_names_binary() {
        assert!(script(Shell::Fish).contains("-c mindfit"));
    }
}
