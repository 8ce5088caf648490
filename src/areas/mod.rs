//! Core repository components
//!
//! - `database`: Object store for blobs and commits
//! - `index`: Staging area for the next commit
//! - `refs`: Branch table and HEAD
//! - `remotes`: Registered remote repositories
//! - `repository`: Handle tying the areas together
//! - `workspace`: Working tree file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod remotes;
pub mod repository;
pub mod workspace;
