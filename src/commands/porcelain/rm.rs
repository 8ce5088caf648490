use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::path::PathBuf;

impl Repository {
    /// Unstage a pending addition, or stage the removal of a tracked file and
    /// delete it from the working tree
    pub fn rm(&self, raw_path: &str) -> anyhow::Result<()> {
        let path = self
            .relative_path(raw_path)
            .ok_or_else(|| RepositoryError::NoReasonToRemove(PathBuf::from(raw_path)))?;

        let mut index = self.index();
        index.rehydrate()?;

        if !index.unstage(&path) {
            let (_, head) = self.head_commit()?;
            if !head.tracks(&path) {
                return Err(RepositoryError::NoReasonToRemove(path).into());
            }

            self.workspace().remove_file(&path)?;
            index.mark_removed(path);
        }

        index.write_updates()
    }
}
