//! Data structures and algorithms
//!
//! - `branch`: Branch and remote names
//! - `checkout`: Working tree migration and untracked-file detection
//! - `core`: Per-invocation configuration
//! - `index`: On-disk staging area format
//! - `log`: History traversal
//! - `merge`: Split point search and per-file merge decisions
//! - `objects`: Blobs and commits
//! - `remote`: Object transfer between stores
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod remote;
pub mod status;
