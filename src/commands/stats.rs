//! Stats command

use waypath_core::error::Result;
use waypath_core::map::MapStats;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// Execute the stats command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_map()?;
    let stats = loaded.map.stats(&loaded.graph);

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => print!("{}", render_human(&stats)),
    }

    Ok(())
}

/// Counts in the navigator's `# of ...` style
pub fn render_human(stats: &MapStats) -> String {
    format!(
        "# of nodes: {}\n# of footways: {}\n# of buildings: {}\n# of vertices: {}\n# of edges: {}\n",
        stats.nodes, stats.footways, stats.buildings, stats.vertices, stats.edges
    )
}
