//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or invalid map, unknown vertex or building)
//!
//! Graph-store outcomes (duplicate vertex, missing edge endpoint, lookup miss)
//! are not errors; they are reported as `bool`/`Option` by the store itself.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing/invalid map, unknown vertex or building (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum NavError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found in graph: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("invalid edge weight {weight} on {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("distance to {vertex} overflows: {distance} + {weight}")]
    DistanceOverflow {
        vertex: String,
        distance: String,
        weight: String,
    },

    #[error("map file not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },

    #[error("{role} building not found: {query}")]
    BuildingNotFound { role: String, query: String },

    #[error("map has no footways to navigate")]
    NoFootways,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NavError {
    /// Create an error for a source vertex absent from the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        NavError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a weight that breaks the non-negative precondition
    pub fn invalid_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: impl std::fmt::Debug,
    ) -> Self {
        NavError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        }
    }

    /// Create an error for a path length that does not fit the weight type
    pub fn distance_overflow(
        vertex: impl std::fmt::Debug,
        distance: impl std::fmt::Debug,
        weight: impl std::fmt::Debug,
    ) -> Self {
        NavError::DistanceOverflow {
            vertex: format!("{:?}", vertex),
            distance: format!("{:?}", distance),
            weight: format!("{:?}", weight),
        }
    }

    /// Create an error for a malformed map description
    pub fn invalid_map(reason: impl Into<String>) -> Self {
        NavError::InvalidMap {
            reason: reason.into(),
        }
    }

    /// Create an error for an unmatched building query
    pub fn building_not_found(role: &str, query: impl std::fmt::Display) -> Self {
        NavError::BuildingNotFound {
            role: role.to_string(),
            query: query.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NavError::UsageError(_) | NavError::InvalidValue { .. } => ExitCode::Usage,

            NavError::VertexNotFound { .. }
            | NavError::InvalidWeight { .. }
            | NavError::DistanceOverflow { .. }
            | NavError::MapNotFound { .. }
            | NavError::InvalidMap { .. }
            | NavError::BuildingNotFound { .. }
            | NavError::NoFootways => ExitCode::Data,

            NavError::Io(_) | NavError::Json(_) | NavError::Toml(_) | NavError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NavError::UsageError(_) => "usage_error",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::VertexNotFound { .. } => "vertex_not_found",
            NavError::InvalidWeight { .. } => "invalid_weight",
            NavError::DistanceOverflow { .. } => "distance_overflow",
            NavError::MapNotFound { .. } => "map_not_found",
            NavError::InvalidMap { .. } => "invalid_map",
            NavError::BuildingNotFound { .. } => "building_not_found",
            NavError::NoFootways => "no_footways",
            NavError::Io(_) => "io_error",
            NavError::Json(_) => "json_error",
            NavError::Toml(_) => "toml_error",
            NavError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, NavError>;
