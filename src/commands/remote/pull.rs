use crate::areas::repository::Repository;
use crate::commands::porcelain::merge::MergeOutcome;

impl Repository {
    /// Fetch a remote branch, then merge its tracking branch into the current one
    pub fn pull(&self, remote_name: &str, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let (tracking_branch, _) = self.fetch(remote_name, branch_name)?;

        self.merge(tracking_branch.as_ref())
    }
}
