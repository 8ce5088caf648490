//! Three-way merge
//!
//! - `bca_finder`: split point (best common ancestor) search
//! - `resolution`: per-file decision between the split point, the current
//!   commit and the given commit, and the conflict file format

pub mod bca_finder;
pub mod resolution;
