//! CLI commands and argument parsing

use crate::types::{AbsentReferencePolicy, InputFormat, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer a JSON-schema-like shape description from documents
#[derive(Parser, Debug)]
#[command(name = crate::NAME)]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the maximum inference depth
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Override how absent references are described
    #[arg(long, global = true)]
    pub absent_reference: Option<AbsentReferencePolicy>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the inferred schema of a document
    Infer {
        /// Input document, or `-` for stdin
        input: PathBuf,

        /// Input format (defaults to the file extension, then JSON)
        #[arg(short, long)]
        input_format: Option<InputFormat>,

        /// Pretty-print the schema
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_infer_command() {
        let cli = Cli::parse_from([
            "schemalike",
            "--absent-reference",
            "label",
            "infer",
            "data.yaml",
            "--pretty",
        ]);

        assert_eq!(cli.absent_reference, Some(AbsentReferencePolicy::Label));
        match cli.command {
            Commands::Infer {
                input,
                input_format,
                pretty,
            } => {
                assert_eq!(input, PathBuf::from("data.yaml"));
                assert_eq!(input_format, None);
                assert!(pretty);
            }
            Commands::Config => panic!("expected infer command"),
        }
    }

    #[test]
    fn test_command_identity() {
        let command = Cli::command();
        assert_eq!(command.get_name(), crate::NAME);
        assert_eq!(command.get_version(), Some(crate::VERSION));
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let cli = Cli::parse_from(["schemalike", "-v", "config"]);
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);

        let cli = Cli::parse_from(["schemalike", "--log-level", "warn", "config"]);
        assert_eq!(cli.effective_log_level(), LogLevel::Warn);
    }
}
