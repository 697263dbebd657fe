//! Library integration tests.

use mindfit::MindFitError;

#[test]
fn error_types_are_public() {
    let err = MindFitError::InvalidImport {
        message: "missing version".into(),
    };
    assert!(err.to_string().contains("missing version"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mindfit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use mindfit::cli::{Cli, Commands, NavCommands};

    let cli = Cli::parse_from(["mindfit", "nav", "start", "body-scan"]);

    if let Some(Commands::Nav(args)) = cli.command {
        assert!(matches!(args.command, NavCommands::Start { ref id } if id == "body-scan"));
    } else {
        panic!("Expected Nav command");
    }
}
