use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::path::PathBuf;

impl Repository {
    /// Switch the working tree and HEAD to another branch
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| RepositoryError::NoSuchCheckoutBranch(branch_name.to_string()))?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| RepositoryError::NoSuchCheckoutBranch(branch_name.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(RepositoryError::AlreadyCurrent.into());
        }

        let mut index = self.index();
        index.rehydrate()?;

        self.switch_tree(&mut index, &target_oid)?;
        self.refs().set_head_branch(&branch_name)?;
        tracing::info!(branch = %branch_name, "switched branch");

        Ok(())
    }

    /// Restore one file from a commit (HEAD when `commit_id` is absent)
    ///
    /// Only the working file is written; the staging area is left alone.
    pub fn checkout_file(&self, commit_id: Option<&str>, raw_path: &str) -> anyhow::Result<()> {
        let commit_oid = match commit_id {
            Some(commit_id) => self.database().resolve_commit_id(commit_id)?,
            None => self.refs().read_head()?,
        };
        let commit = self.database().parse_object_as_commit(&commit_oid)?;

        let path = self
            .relative_path(raw_path)
            .ok_or_else(|| RepositoryError::FileNotInCommit(PathBuf::from(raw_path)))?;
        let blob_id = commit
            .blob_for(&path)
            .ok_or_else(|| RepositoryError::FileNotInCommit(path.clone()))?;
        let blob = self.database().parse_object_as_blob(blob_id)?;

        self.workspace().write_file(&path, blob.content())
    }

    /// Make the working tree match `target_oid`, starting from HEAD's snapshot
    ///
    /// Fails before touching anything if an untracked file is in the way.
    /// Clears the staging area; moving refs is up to the caller.
    pub(crate) fn switch_tree(&self, index: &mut Index, target_oid: &ObjectId) -> anyhow::Result<()> {
        let (_, head) = self.head_commit()?;
        let target = self.database().parse_object_as_commit(target_oid)?;

        let mut migration = Migration::new(self, head.files(), target.files());
        migration.apply_changes()?;

        index.clear();
        index.write_updates()
    }
}
