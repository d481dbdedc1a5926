use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small campus: main footway 1-2-3-4 with a spur 3-5, a detached footway
/// 20-21 and a node (99) on no footway.
pub const CAMPUS_JSON: &str = r#"{
    "nodes": [
        {"id": 1, "lat": 41.8700, "lon": -87.6500},
        {"id": 2, "lat": 41.8700, "lon": -87.6490},
        {"id": 3, "lat": 41.8700, "lon": -87.6480},
        {"id": 4, "lat": 41.8700, "lon": -87.6470},
        {"id": 5, "lat": 41.8690, "lon": -87.6480},
        {"id": 20, "lat": 41.8800, "lon": -87.6400},
        {"id": 21, "lat": 41.8800, "lon": -87.6390},
        {"id": 99, "lat": 41.9000, "lon": -87.7000}
    ],
    "footways": [
        {"id": 100, "nodes": [1, 2, 3, 4]},
        {"id": 101, "nodes": [3, 5]},
        {"id": 102, "nodes": [20, 21]}
    ],
    "buildings": [
        {"abbrev": "SEO", "name": "Science & Engineering Offices", "id": 1001, "lat": 41.8701, "lon": -87.6501},
        {"abbrev": "LIB", "name": "Richard J. Daley Library", "id": 1002, "lat": 41.8689, "lon": -87.6479},
        {"abbrev": "ARC", "name": "Architecture Annex", "id": 1003, "lat": 41.8801, "lon": -87.6391}
    ]
}"#;

/// Get a Command for waypath, isolated from the caller's config and env
pub fn waypath(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.env("WAYPATH_CONFIG_DIR", config_dir)
        .env_remove("WAYPATH_MAP")
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Setup a temp dir holding the fixture map; returns the dir and map path
pub fn setup_campus() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let map = dir.path().join("campus.json");
    fs::write(&map, CAMPUS_JSON).unwrap();
    (dir, map)
}
