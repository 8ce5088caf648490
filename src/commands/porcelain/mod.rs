//! Porcelain commands
//!
//! ## Commands
//!
//! - `init`: Create a repository with its root commit
//! - `add`: Stage a file
//! - `rm`: Unstage a file or stage its removal
//! - `commit`: Snapshot the staged changes
//! - `log`: Show history (`log`, `global-log`, `find`)
//! - `status`: Show branches, staged and unstaged changes
//! - `checkout`: Switch branches or restore files
//! - `branch`: Create and delete branches
//! - `reset`: Move the current branch to any commit
//! - `merge`: Merge another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
