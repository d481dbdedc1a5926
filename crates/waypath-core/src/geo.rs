//! Geodesic distance between map coordinates
//!
//! Great-circle distance via the haversine formula on a spherical earth.
//! Results are in miles; [`Units::convert`] rescales for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Mean earth radius used for haversine distances, in miles
pub const EARTH_RADIUS_MILES: f64 = 3963.19;

const KILOMETERS_PER_MILE: f64 = 1.609344;

/// A map position identified by its node id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(id: i64, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon }
    }

    /// Distance in miles to `other`
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_between(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine distance in miles between two latitude/longitude pairs (degrees).
///
/// Always non-negative, so it is safe to use directly as an edge weight.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp guards against a > 1 from rounding on antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_MILES * c
}

/// Distance units for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Miles,
    Kilometers,
}

impl Units {
    /// Convert a distance in miles into these units
    pub fn convert(&self, miles: f64) -> f64 {
        match self {
            Units::Miles => miles,
            Units::Kilometers => miles * KILOMETERS_PER_MILE,
        }
    }

    /// Label used after printed distances
    pub fn label(&self) -> &'static str {
        match self {
            Units::Miles => "miles",
            Units::Kilometers => "km",
        }
    }
}

impl FromStr for Units {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "miles" | "mi" => Ok(Units::Miles),
            "kilometers" | "km" => Ok(Units::Kilometers),
            other => Err(NavError::invalid_value("units", other)),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Miles => write!(f, "miles"),
            Units::Kilometers => write!(f, "kilometers"),
        }
    }
}
