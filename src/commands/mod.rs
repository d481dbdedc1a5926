//! Command implementations for waypath

pub mod dispatch;
pub mod navigate;
pub mod route;
pub mod stats;
