//! Interactive navigation over stdin

use std::io::{self, BufRead, Write};

use tracing::debug;
use waypath_core::bail_usage;
use waypath_core::error::{NavError, Result};
use waypath_core::geo::Units;
use waypath_core::graph::Graph;
use waypath_core::map::{plan_route, CampusMap};

use super::dispatch::{CommandContext, LoadedMap};
use super::{route, stats};
use crate::cli::OutputFormat;

const START_PROMPT: &str = "Enter start (partial name or abbreviation), or #> ";
const DESTINATION_PROMPT: &str = "Enter destination (partial name or abbreviation)> ";

/// Display settings for a session
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub units: Units,
    pub precision: usize,
    pub prompt: bool,
}

/// Execute the navigate command
pub fn execute(ctx: &CommandContext, no_prompt: bool) -> Result<()> {
    if ctx.cli.format == OutputFormat::Json {
        bail_usage!("navigate only supports human output; use `route` for JSON");
    }

    let LoadedMap { map, graph } = ctx.load_map()?;
    let opts = SessionOptions {
        units: ctx.units(),
        precision: ctx.precision(),
        prompt: ctx.config.prompt && !no_prompt,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&map, &graph, opts, stdin.lock(), stdout.lock())
}

/// Reads one trimmed line, or `None` at end of input
fn read_query<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<W: Write>(out: &mut W, opts: &SessionOptions, text: &str) -> Result<()> {
    if opts.prompt {
        write!(out, "{}", text)?;
        out.flush()?;
    }
    Ok(())
}

/// Answer start/destination queries until `#` or end of input.
///
/// An unmatched building is reported and the loop continues; any other
/// error ends the session.
pub fn run_session<R: BufRead, W: Write>(
    map: &CampusMap,
    graph: &Graph<i64, f64>,
    opts: SessionOptions,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "** Navigating campus map **")?;
    writeln!(out)?;
    write!(out, "{}", stats::render_human(&map.stats(graph)))?;
    writeln!(out)?;

    let mut queries = 0usize;
    loop {
        prompt(&mut out, &opts, START_PROMPT)?;
        let Some(from) = read_query(&mut input)? else {
            break;
        };
        if from == "#" {
            break;
        }

        prompt(&mut out, &opts, DESTINATION_PROMPT)?;
        let Some(to) = read_query(&mut input)? else {
            break;
        };
        queries += 1;

        match plan_route(map, graph, &from, &to) {
            Ok(report) => write!(
                out,
                "{}",
                route::render_human(&report, opts.units, opts.precision)
            )?,
            Err(NavError::BuildingNotFound { role, .. }) => {
                writeln!(out, "{} building not found", role)?
            }
            Err(e) => return Err(e),
        }

        writeln!(out)?;
    }

    debug!(queries, "navigate_done");
    writeln!(out, "** Done **")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MAP_JSON: &str = r#"{
        "nodes": [
            {"id": 1, "lat": 41.8700, "lon": -87.6500},
            {"id": 2, "lat": 41.8700, "lon": -87.6490},
            {"id": 3, "lat": 41.8690, "lon": -87.6490},
            {"id": 20, "lat": 41.8800, "lon": -87.6400},
            {"id": 21, "lat": 41.8800, "lon": -87.6390}
        ],
        "footways": [
            {"id": 100, "nodes": [1, 2, 3]},
            {"id": 102, "nodes": [20, 21]}
        ],
        "buildings": [
            {"abbrev": "SEO", "name": "Science & Engineering Offices", "id": 1001, "lat": 41.8701, "lon": -87.6501},
            {"abbrev": "LIB", "name": "Richard J. Daley Library", "id": 1002, "lat": 41.8689, "lon": -87.6489},
            {"abbrev": "ARC", "name": "Architecture Annex", "id": 1003, "lat": 41.8801, "lon": -87.6391}
        ]
    }"#;

    fn session(input: &str, prompt: bool) -> String {
        let map = CampusMap::from_json_str(MAP_JSON).unwrap();
        let graph = map.build_graph();
        let opts = SessionOptions {
            units: Units::Miles,
            precision: 4,
            prompt,
        };
        let mut out = Vec::new();
        run_session(&map, &graph, opts, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_done() {
        let out = session("#\n", false);
        assert!(out.starts_with("** Navigating campus map **\n\n# of nodes: 5\n"));
        assert!(out.contains("# of edges: 6\n"));
        assert!(out.ends_with("** Done **\n"));
    }

    #[test]
    fn test_route_query() {
        let out = session("SEO\nLibrary\n#\n", false);
        assert!(out.contains("Starting point:\n Science & Engineering Offices\n"));
        assert!(out.contains("Destination point:\n Richard J. Daley Library\n"));
        assert!(out.contains("Path: 1->2->3\n"));
    }

    #[test]
    fn test_unmatched_buildings_continue() {
        let out = session("Nowhere\nSEO\nSEO\nNowhere\n#\n", false);
        assert!(out.contains("Start building not found\n"));
        assert!(out.contains("Destination building not found\n"));
        assert!(out.ends_with("** Done **\n"));
    }

    #[test]
    fn test_unreachable_destination() {
        let out = session("SEO\nARC\n", false);
        assert!(out.contains("Sorry, destination unreachable\n"));
    }

    #[test]
    fn test_end_of_input_finishes() {
        let out = session("SEO\n", true);
        assert!(out.contains(START_PROMPT));
        assert!(out.contains(DESTINATION_PROMPT));
        assert!(out.ends_with("** Done **\n"));
    }

    #[test]
    fn test_prompts_suppressed() {
        let out = session("#\n", false);
        assert!(!out.contains(START_PROMPT));
    }
}
