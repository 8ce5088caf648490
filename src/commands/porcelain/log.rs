use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// First-parent history of HEAD, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.refs().read_head()?;

        for entry in RevList::new(self.database(), head_oid) {
            let (commit_oid, commit) = entry?;
            self.show_commit(&commit_oid, &commit)?;
        }

        Ok(())
    }

    /// Every commit ever made, newest first
    pub fn global_log(&self) -> anyhow::Result<()> {
        let mut commits = self.database().list_commits()?;
        commits.sort_by(|(left_oid, left), (right_oid, right)| {
            right
                .timestamp()
                .cmp(&left.timestamp())
                .then_with(|| left_oid.cmp(right_oid))
        });

        for (commit_oid, commit) in &commits {
            self.show_commit(commit_oid, commit)?;
        }

        Ok(())
    }

    /// Print the ids of all commits with exactly this message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let matches = self
            .database()
            .list_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(commit_oid, _)| commit_oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(RepositoryError::NoCommitWithMessage.into());
        }

        for commit_oid in matches {
            writeln!(self.writer(), "{}", commit_oid)?;
        }

        Ok(())
    }

    fn show_commit(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", commit_oid)?;
        if commit.is_merge() {
            let parents = commit.parents();
            writeln!(
                writer,
                "Merge: {} {}",
                parents[0].to_short_oid(),
                parents[1].to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
