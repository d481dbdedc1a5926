//! Route command and the shared route report rendering

use std::fmt::Write as _;

use serde::Serialize;
use waypath_core::error::Result;
use waypath_core::geo::{Coordinates, Units};
use waypath_core::map::{plan_route, RouteReport};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// JSON shape of a route answer: the report plus the distance in the
/// requested units.
#[derive(Debug, Serialize)]
pub struct RouteOutput<'a> {
    #[serde(flatten)]
    pub report: &'a RouteReport,
    pub units: Units,
    pub converted_distance: Option<f64>,
}

impl<'a> RouteOutput<'a> {
    pub fn new(report: &'a RouteReport, units: Units) -> Self {
        Self {
            report,
            units,
            converted_distance: report.distance.map(|d| units.convert(d)),
        }
    }
}

/// Execute the route command
pub fn execute(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let loaded = ctx.load_map()?;
    let report = plan_route(&loaded.map, &loaded.graph, from, to)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = RouteOutput::new(&report, ctx.units());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", render_human(&report, ctx.units(), ctx.precision()));
        }
    }

    Ok(())
}

fn write_position(out: &mut String, coords: &Coordinates, precision: usize) {
    let _ = writeln!(
        out,
        " ({:.prec$}, {:.prec$})",
        coords.lat,
        coords.lon,
        prec = precision
    );
}

/// Render a report the way the interactive navigator prints it
pub fn render_human(report: &RouteReport, units: Units, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("Starting point:\n");
    let _ = writeln!(out, " {}", report.start.name);
    write_position(&mut out, &report.start.coords, precision);

    out.push_str("Destination point:\n");
    let _ = writeln!(out, " {}", report.destination.name);
    write_position(&mut out, &report.destination.coords, precision);

    out.push('\n');
    out.push_str("Nearest start node:\n");
    let _ = writeln!(out, " {}", report.start_node.id);
    write_position(&mut out, &report.start_node, precision);

    out.push_str("Nearest destination node:\n");
    let _ = writeln!(out, " {}", report.destination_node.id);
    write_position(&mut out, &report.destination_node, precision);

    out.push('\n');
    out.push_str("Navigating with Dijkstra...\n");

    match (report.distance, &report.path) {
        (Some(distance), Some(path)) => {
            let _ = writeln!(
                out,
                "Distance to dest: {:.prec$} {}",
                units.convert(distance),
                units.label(),
                prec = precision
            );
            let joined: Vec<String> = path.iter().map(i64::to_string).collect();
            let _ = writeln!(out, "Path: {}", joined.join("->"));
        }
        _ => out.push_str("Sorry, destination unreachable\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::map::Building;

    fn report(distance: Option<f64>, path: Option<Vec<i64>>) -> RouteReport {
        RouteReport {
            start: Building {
                abbrev: "SEO".into(),
                name: "Science & Engineering Offices".into(),
                coords: Coordinates::new(7, 41.87, -87.65),
            },
            destination: Building {
                abbrev: "LIB".into(),
                name: "Richard J. Daley Library".into(),
                coords: Coordinates::new(8, 41.86, -87.64),
            },
            start_node: Coordinates::new(1, 41.87, -87.65),
            destination_node: Coordinates::new(5, 41.86, -87.64),
            distance,
            path,
        }
    }

    #[test]
    fn test_render_reachable() {
        let out = render_human(&report(Some(1.5), Some(vec![1, 2, 5])), Units::Miles, 2);
        assert!(out.starts_with("Starting point:\n Science & Engineering Offices\n (41.87, -87.65)\n"));
        assert!(out.contains("Nearest destination node:\n 5\n (41.86, -87.64)\n"));
        assert!(out.contains("Navigating with Dijkstra...\n"));
        assert!(out.contains("Distance to dest: 1.50 miles\n"));
        assert!(out.ends_with("Path: 1->2->5\n"));
    }

    #[test]
    fn test_render_converts_units() {
        let out = render_human(&report(Some(1.0), Some(vec![1, 5])), Units::Kilometers, 3);
        assert!(out.contains("Distance to dest: 1.609 km\n"));
    }

    #[test]
    fn test_render_unreachable() {
        let out = render_human(&report(None, None), Units::Miles, 6);
        assert!(out.ends_with("Sorry, destination unreachable\n"));
        assert!(!out.contains("Path:"));
    }

    #[test]
    fn test_json_output_flattens_report() {
        let r = report(Some(2.0), Some(vec![1, 5]));
        let value = serde_json::to_value(RouteOutput::new(&r, Units::Kilometers)).unwrap();
        assert_eq!(value["start"]["abbrev"], "SEO");
        assert_eq!(value["path"], serde_json::json!([1, 5]));
        assert_eq!(value["units"], "kilometers");
        assert!(value["converted_distance"].as_f64().unwrap() > 3.2);
    }
}
