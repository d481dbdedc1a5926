//! Output format selection

use clap::ValueEnum;

/// Output format for waypath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Readable output matching the interactive navigator
    #[default]
    Human,
    /// Stable, machine-readable JSON
    Json,
}
