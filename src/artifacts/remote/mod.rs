//! Object transfer between repositories
//!
//! - `transfer`: Copy the history behind a commit from one store to another

pub mod transfer;
