//! Working tree status inspection
//!
//! Compares the working tree against the staging area and the HEAD commit.
//!
//! - `file_change`: Kinds of unstaged changes
//! - `status_info`: Collects the report printed by `status`

pub mod file_change;
pub mod status_info;
