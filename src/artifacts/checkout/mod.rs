//! Branch switches and resets
//!
//! Moving the working tree from one commit's snapshot to another:
//! - Detecting untracked files the target would overwrite
//! - Planning which files to write and which to delete
//! - Applying the plan to the working tree
//!
//! Conflicts are detected before any file is touched.

pub mod conflict;
pub mod migration;
