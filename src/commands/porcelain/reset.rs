use crate::areas::repository::Repository;

impl Repository {
    /// Check out an arbitrary commit and move the current branch to it
    pub fn reset(&self, commit_id: &str) -> anyhow::Result<()> {
        let target_oid = self.database().resolve_commit_id(commit_id)?;

        let mut index = self.index();
        index.rehydrate()?;

        self.switch_tree(&mut index, &target_oid)?;
        self.refs().update_head(&target_oid)?;
        tracing::info!(oid = %target_oid, "reset current branch");

        Ok(())
    }
}
