//! Command-line argument definitions for the chuva processor
//!
//! Defines the CLI interface using the clap derive API. Both subcommands
//! share the same workspace/session arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::constants;
use crate::{Error, Result};

/// CLI arguments for the ANA rainfall processor
///
/// Aggregates ANA "Chuvas" station exports into monthly, annual and
/// seasonal precipitation series for interactive exploration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chuva-processor",
    version,
    about = "Aggregate ANA rainfall station exports into monthly, annual and seasonal series",
    long_about = "Processes ANA 'Chuvas' station CSV exports into per-station monthly \
                  precipitation tables and derives annual totals, seasonal means/sums and \
                  rain-day counts. Run 'explore' for an interactive session or 'report' \
                  for a non-interactive workspace summary."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the chuva processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Interactively explore stations and aggregate views
    Explore(SessionArgs),
    /// Print a non-interactive summary of the workspace
    Report(SessionArgs),
}

/// Arguments shared by both subcommands
#[derive(Debug, Clone, Parser)]
pub struct SessionArgs {
    /// Workspace directory scanned for station files
    ///
    /// Station files are named `<station>_Chuvas.csv`; everything else in
    /// the directory is ignored.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "PATH",
        default_value = constants::DEFAULT_WORKSPACE,
        help = "Workspace directory containing *_Chuvas.csv station files"
    )]
    pub workspace: PathBuf,

    /// Number of station files parsed concurrently
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "N",
        default_value_t = constants::DEFAULT_PARSE_CONCURRENCY,
        help = "Number of station files parsed concurrently"
    )]
    pub jobs: usize,

    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Logging verbosity: error, warn, info, debug, trace"
    )]
    pub log_level: String,

    /// Suppress progress output and summaries
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

impl SessionArgs {
    /// Validate argument combinations before processing starts
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(Error::configuration("--jobs must be at least 1"));
        }

        match self.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::configuration(format!(
                "invalid log level '{}': expected error, warn, info, debug or trace",
                other
            ))),
        }
    }

    /// Build the processing configuration from these arguments
    pub fn to_config(&self) -> Config {
        Config::new(self.workspace.clone()).with_parse_concurrency(self.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_args(extra: &[&str]) -> SessionArgs {
        let mut argv = vec!["chuva-processor", "explore"];
        argv.extend_from_slice(extra);
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Some(Commands::Explore(session)) => session,
            other => panic!("expected explore subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let session = session_args(&[]);
        assert_eq!(session.workspace, PathBuf::from("dados_chuvaANA"));
        assert_eq!(session.jobs, 4);
        assert_eq!(session.log_level, "warn");
        assert!(!session.quiet);
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let session = session_args(&["-w", "/data/chuvas", "-j", "2", "--log-level", "debug"]);
        assert_eq!(session.workspace, PathBuf::from("/data/chuvas"));
        assert_eq!(session.jobs, 2);
        assert_eq!(session.log_level, "debug");
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let session = session_args(&["--jobs", "0"]);
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let session = session_args(&["--log-level", "loud"]);
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_to_config() {
        let session = session_args(&["-w", "/data/chuvas", "-j", "8"]);
        let config = session.to_config();
        assert_eq!(config.workspace, PathBuf::from("/data/chuvas"));
        assert_eq!(config.parse_concurrency, 8);
    }
}
