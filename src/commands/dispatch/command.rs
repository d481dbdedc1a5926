//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;
use waypath_core::config::NavConfig;
use waypath_core::error::Result;
use waypath_core::geo::Units;
use waypath_core::graph::Graph;
use waypath_core::map::CampusMap;

use crate::cli::Cli;

/// A loaded map together with its walking graph
pub struct LoadedMap {
    pub map: CampusMap,
    pub graph: Graph<i64, f64>,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NavConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: NavConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Units from `--units`, else from config
    pub fn units(&self) -> Units {
        self.cli.units.unwrap_or(self.config.units)
    }

    pub fn precision(&self) -> usize {
        self.config.precision
    }

    /// Load the map named by `--map`/config and build its graph
    pub fn load_map(&self) -> Result<LoadedMap> {
        let path = self.config.resolve_map_file(self.cli.map.as_deref());
        let map = CampusMap::load(&path)?;
        debug!(elapsed = ?self.start.elapsed(), "load_map");

        let graph = map.build_graph();
        Ok(LoadedMap { map, graph })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest walking routes between campus buildings.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
