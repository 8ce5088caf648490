use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        self.write_commit(&mut index, message, None)?;

        Ok(())
    }

    /// Snapshot HEAD's files overlaid with the staging area and advance the
    /// current branch to it
    ///
    /// A merge passes the given branch's commit as `second_parent`; merge
    /// commits are created even when nothing ended up staged.
    pub fn write_commit(
        &self,
        index: &mut Index,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyMessage.into());
        }
        if index.is_empty() && second_parent.is_none() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let (head_oid, head) = self.head_commit()?;

        let mut files = head.files().clone();
        for (path, blob_id) in index.added() {
            files.insert(path.clone(), blob_id.clone());
        }
        for path in index.removed() {
            files.remove(path);
        }

        let parents = std::iter::once(head_oid)
            .chain(second_parent)
            .collect::<Vec<_>>();
        let commit = Commit::new(
            parents,
            self.config().commit_timestamp(),
            files,
            message.to_string(),
        );

        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;
        tracing::info!(oid = %commit_id, "created commit");

        index.clear();
        index.write_updates()?;

        Ok(commit_id)
    }
}
