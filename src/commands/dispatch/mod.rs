//! Command dispatch logic for waypath

use std::time::Instant;

use tracing::debug;
use waypath_core::config::NavConfig;
use waypath_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{navigate, route, stats};

mod command;

pub use command::{Command, CommandContext, LoadedMap, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Stats => stats::execute(ctx),
            Commands::Route { from, to } => route::execute(ctx, from, to),
            Commands::Navigate { no_prompt } => navigate::execute(ctx, *no_prompt),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = NavConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
