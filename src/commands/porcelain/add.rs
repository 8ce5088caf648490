use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::is_recordable_path;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;
use std::path::PathBuf;

impl Repository {
    /// Stage the current content of a file
    ///
    /// Adding a file identical to HEAD's version drops any staged change for it.
    pub fn add(&self, raw_path: &str) -> anyhow::Result<()> {
        let path = self
            .relative_path(raw_path)
            .ok_or_else(|| RepositoryError::FileNotFound(PathBuf::from(raw_path)))?;
        if !self.workspace().file_exists(&path) {
            return Err(RepositoryError::FileNotFound(path).into());
        }
        if !is_recordable_path(&path) {
            return Err(RepositoryError::UnrecordableFileName(path).into());
        }

        let mut index = self.index();
        index.rehydrate()?;

        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = blob.object_id()?;
        let (_, head) = self.head_commit()?;

        if head.blob_for(&path) == Some(&blob_id) {
            index.unstage(&path);
            index.unmark_removed(&path);
            tracing::debug!(?path, "file matches HEAD, nothing staged");
        } else {
            self.database().store(&blob)?;
            index.stage(path, blob_id);
        }

        index.write_updates()
    }
}
