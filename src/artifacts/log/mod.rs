//! Commit history traversal
//!
//! - `rev_list`: first-parent history from a commit, as printed by `log`
//! - `ancestry`: every ancestor of a commit through both parents, used by
//!   push and fetch to decide what to transfer and whether a push fast-forwards

pub mod ancestry;
pub mod rev_list;
