//! Value parsers for CLI arguments

use waypath_core::geo::Units;

/// Parse distance units (`miles`/`mi` or `kilometers`/`km`)
pub fn parse_units(s: &str) -> Result<Units, String> {
    s.parse::<Units>().map_err(|e| e.to_string())
}
