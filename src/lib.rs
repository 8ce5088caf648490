//! sprig: a small local version control system
//!
//! - `areas`: The repository handle and its on-disk areas
//! - `artifacts`: Data structures and algorithms behind the commands
//! - `commands`: One method per command on the repository handle
//! - `errors`: Errors reported to the user

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
