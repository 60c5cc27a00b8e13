//! CLI command definitions for the `elizacog` binary.
//!
//! Uses clap derive macros for argument parsing. Global flags may appear
//! before or after the subcommand (`elizacog --directory ./ai init` and
//! `elizacog init --directory ./ai` are equivalent).

pub mod init;
pub mod status;
pub mod test_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::style;

const EXAMPLES: &str = "\
Examples:
  elizacog init                    # Initialize in current directory
  elizacog init --directory ./ai   # Initialize in specific directory
  elizacog test                    # Test the integration
  elizacog status                  # Show integration status

For more information, visit: https://github.com/opencog/atomspace";

/// ElizaCog: OpenCog-ElizaOS integration tool.
#[derive(Parser, Debug)]
#[command(name = "elizacog", version, about, long_about = None)]
#[command(propagate_version = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Base directory for integration.
    #[arg(long, global = true, default_value = ".")]
    pub directory: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize OpenCog-ElizaOS integration.
    Init,

    /// Test the integration.
    Test,

    /// Show integration status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Print a command banner with an underline.
pub(crate) fn print_header(icon: &str, title: &str) {
    let line = format!("{icon} {title}");
    println!("{}", style(&line).bold());
    println!("{}", style("=".repeat(line.chars().count())).dim());
}

pub(crate) fn check_mark(ok: bool) -> String {
    if ok {
        format!("{}", style("✓").green())
    } else {
        format!("{}", style("✗").red())
    }
}

/// Render a flag as `True`/`False`.
pub(crate) fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Render an optional flag, `Unknown` when unset.
pub(crate) fn optional_flag(value: Option<bool>) -> &'static str {
    value.map(flag).unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_init_defaults_to_current_dir() {
        let cli = Cli::parse_from(["elizacog", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init)));
        assert_eq!(cli.directory, PathBuf::from("."));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_directory_before_subcommand() {
        let cli = Cli::parse_from(["elizacog", "--directory", "/tmp/ai", "test"]);
        assert!(matches!(cli.command, Some(Commands::Test)));
        assert_eq!(cli.directory, PathBuf::from("/tmp/ai"));
    }

    #[test]
    fn test_parse_directory_after_subcommand() {
        let cli = Cli::parse_from(["elizacog", "status", "--directory", "./ai", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Status)));
        assert_eq!(cli.directory, PathBuf::from("./ai"));
        assert!(cli.json);
    }

    #[test]
    fn test_parse_no_subcommand_is_none() {
        let cli = Cli::parse_from(["elizacog"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_verbosity() {
        let cli = Cli::parse_from(["elizacog", "-vv", "status"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["elizacog", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_parse_invalid_command_fails() {
        assert!(Cli::try_parse_from(["elizacog", "deploy"]).is_err());
    }

    #[test]
    fn test_flag_rendering() {
        assert_eq!(flag(true), "True");
        assert_eq!(flag(false), "False");
        assert_eq!(optional_flag(None), "Unknown");
        assert_eq!(optional_flag(Some(true)), "True");
    }
}
