//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --map, --config, --format, --units, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::parse_units;
use waypath_core::geo::Units;

/// Waypath - shortest walking routes between campus buildings
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Map description file (JSON)
    #[arg(long, global = true, env = "WAYPATH_MAP")]
    pub map: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Units for printed distances (overrides config)
    #[arg(long, global = true, value_parser = parse_units)]
    pub units: Option<Units>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `waypath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show map and graph counts
    Stats,

    /// Find the shortest walking route between two buildings
    Route {
        /// Start building (abbreviation or part of its name)
        from: String,

        /// Destination building (abbreviation or part of its name)
        to: String,
    },

    /// Answer route queries interactively from stdin (`#` quits)
    Navigate {
        /// Do not print prompts (for piped input)
        #[arg(long)]
        no_prompt: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["waypath", "--map", "m.json", "route", "SEO", "Library"])
            .unwrap();
        assert_eq!(cli.map, Some(PathBuf::from("m.json")));
        match cli.command {
            Some(Commands::Route { from, to }) => {
                assert_eq!(from, "SEO");
                assert_eq!(to, "Library");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "waypath", "stats", "--format", "json", "--units", "kilometers", "-v",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.units, Some(Units::Kilometers));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["waypath", "--format", "xml", "stats"]).is_err());
    }
}
