//! Commands syncing with repositories elsewhere on the filesystem
//!
//! - `registration`: Register and forget remotes
//! - `push`: Send the current history to a remote branch
//! - `fetch`: Bring a remote branch down as a tracking branch
//! - `pull`: Fetch, then merge the tracking branch

pub mod fetch;
pub mod pull;
pub mod push;
pub mod registration;

use crate::artifacts::branch::branch_name::RemoteName;
use crate::errors::RepositoryError;

/// Parse a remote name given on the command line; a name that can never be
/// registered is simply unknown
fn parse_remote_name(remote_name: &str) -> anyhow::Result<RemoteName> {
    RemoteName::try_parse(remote_name.to_string())
        .map_err(|_| RepositoryError::NoSuchRemote(remote_name.to_string()).into())
}
