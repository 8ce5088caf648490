use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::ancestry::is_ancestor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::remote::transfer::transfer_history;
use crate::commands::remote::parse_remote_name;
use crate::errors::RepositoryError;

impl Repository {
    /// Append the local history to `branch_name` on the remote
    ///
    /// The remote branch must be part of the local history; otherwise nothing
    /// changes on either side.
    pub fn push(&self, remote_name: &str, branch_name: &str) -> anyhow::Result<()> {
        let remote_name = parse_remote_name(remote_name)?;
        let remote = self.remotes().open(&remote_name)?;
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let head_oid = self.refs().read_head()?;

        if let Some(remote_oid) = remote.refs().read_branch(&branch_name)? {
            let database = self.database();
            let contained = is_ancestor(&remote_oid, &head_oid, |oid: &ObjectId| {
                database.load_slim_commit(oid)
            })?;

            if !contained {
                tracing::debug!(remote = %remote_name, branch = %branch_name, %remote_oid, "remote branch diverged");
                return Err(RepositoryError::RemoteDiverged.into());
            }
        }

        transfer_history(self.database(), remote.database(), &head_oid)?;
        remote.refs().update_branch(&branch_name, &head_oid)?;
        tracing::info!(remote = %remote_name, branch = %branch_name, oid = %head_oid, "pushed");

        Ok(())
    }
}
