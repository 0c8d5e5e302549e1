use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::common::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dcest", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the electrical bus count of a data-center power system
    Buses {
        /// Path to a TOML configuration profile (defaults apply when omitted)
        #[arg(long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Estimate the cost of power system studies for a facility
    Cost {
        /// Path to a TOML configuration profile (defaults apply when omitted)
        #[arg(long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write a commented default configuration profile
    Template {
        /// Which estimator the profile is for
        #[arg(value_enum)]
        kind: TemplateKind,

        /// Write the profile to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Estimator a configuration template targets.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    /// Bus-count estimator profile
    Buses,
    /// Study-cost estimator profile
    Cost,
}

/// Build the clap command tree (used by the completions subcommand).
pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_buses_with_format() {
        let cli = Cli::try_parse_from(["dcest", "buses", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Buses { format, config, .. } => {
                assert_eq!(format, OutputFormat::Json);
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["dcest", "cost", "--format", "parquet"]).is_err());
    }

    #[test]
    fn test_command_tree_is_well_formed() {
        build_cli_command().debug_assert();
    }
}
