//! Command implementations
//!
//! Every command is an inherent method on [`Repository`](crate::areas::repository::Repository),
//! one file per command, grouped by what they operate on:
//!
//! - `porcelain`: Local version control workflows (add, commit, merge, etc.)
//! - `remote`: Exchanging history with other repositories on the filesystem

pub mod porcelain;
pub mod remote;
