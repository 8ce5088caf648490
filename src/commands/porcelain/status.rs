use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let status_info = {
            let mut index = self.index();
            index.rehydrate()?;

            Status::new(self).initialize(&index)?
        };

        self.print_status(&status_info)
    }

    fn print_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch in &status_info.branches {
            let marker = if branch == &status_info.current_branch {
                "*"
            } else {
                ""
            };
            writeln!(writer, "{}{}", marker, branch)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for file in &status_info.staged_files {
            writeln!(writer, "{}", file.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for file in &status_info.removed_files {
            writeln!(writer, "{}", file.display())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (file, change) in &status_info.workspace_changeset {
            writeln!(writer, "{} ({})", file.display(), change)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for file in &status_info.untracked_files {
            writeln!(writer, "{}", file.display())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
