use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .sprig/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .sprig/refs/heads directory")?;

        let root_oid = self
            .database()
            .store(&Commit::root())
            .context("Failed to store the root commit")?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .update_branch(&default_branch, &root_oid)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head_branch(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty sprig repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
