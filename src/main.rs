//! Waypath - shortest walking routes between campus buildings
//!
//! Loads a campus map, builds its footway graph and answers
//! building-to-building route queries with Dijkstra's algorithm.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use waypath_core::error::{ExitCode as NavExitCode, NavError};
use waypath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err, std::env::args().skip(1)),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => NavExitCode::Success,
        Err(e) => report(&e, cli.format, cli.quiet),
    };
    ExitCode::from(code as u8)
}

/// Print a command failure in the requested format and pick its exit code
fn report(err: &NavError, format: OutputFormat, quiet: bool) -> NavExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    err.exit_code()
}

/// Handle a clap failure.
///
/// `Cli.format` is unavailable here, so a JSON request is read from argv;
/// in that case the failure is printed as an error envelope. Help and
/// version output, and everything else, go through clap.
fn parse_failure(err: clap::Error, args: impl Iterator<Item = String>) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !requests_json(args) {
        err.exit();
    }

    let nav_error = clap_error_to_nav(&err);
    ExitCode::from(report(&nav_error, OutputFormat::Json, false) as u8)
}

fn clap_error_to_nav(err: &clap::Error) -> NavError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => NavError::UsageError(err.to_string()),
        _ => NavError::Other(err.to_string()),
    }
}

/// Whether argv selects `--format json` (separate or `=` form)
fn requests_json(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|a| a == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_requests_json_forms() {
        assert!(requests_json(argv(&["--format", "json", "stats"])));
        assert!(requests_json(argv(&["route", "--format=json"])));
        assert!(!requests_json(argv(&["--format", "human", "stats"])));
        assert!(!requests_json(argv(&["--format"])));
        assert!(!requests_json(argv(&["json"])));
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let err = Cli::try_parse_from(["waypath", "route", "SEO"]).unwrap_err();
        let nav = clap_error_to_nav(&err);
        assert!(matches!(nav, NavError::UsageError(_)));
        assert_eq!(nav.exit_code(), NavExitCode::Usage);
    }

    #[test]
    fn test_report_returns_exit_code() {
        let err = NavError::building_not_found("Start", "Nowhere");
        assert_eq!(report(&err, OutputFormat::Human, true), NavExitCode::Data);
    }
}
