use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::remote::transfer::transfer_history;
use crate::commands::remote::parse_remote_name;
use crate::errors::RepositoryError;

impl Repository {
    /// Copy a remote branch's history and point `<remote>/<branch>` at it
    ///
    /// Returns the tracking branch and the commit it now points at.
    pub fn fetch(
        &self,
        remote_name: &str,
        branch_name: &str,
    ) -> anyhow::Result<(BranchName, ObjectId)> {
        let remote_name = parse_remote_name(remote_name)?;
        let remote = self.remotes().open(&remote_name)?;

        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| RepositoryError::RemoteBranchNotFound(branch_name.to_string()))?;
        let remote_oid = remote
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| RepositoryError::RemoteBranchNotFound(branch_name.to_string()))?;

        transfer_history(remote.database(), self.database(), &remote_oid)?;

        let tracking_branch = BranchName::tracking(&remote_name, &branch_name)?;
        self.refs().update_branch(&tracking_branch, &remote_oid)?;
        tracing::info!(branch = %tracking_branch, oid = %remote_oid, "fetched");

        Ok((tracking_branch, remote_oid))
    }
}
