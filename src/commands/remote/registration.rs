use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::RemoteName;
use crate::commands::remote::parse_remote_name;

impl Repository {
    pub fn add_remote(&self, remote_name: &str, location: &str) -> anyhow::Result<()> {
        let remote_name = RemoteName::try_parse(remote_name.to_string())?;

        self.remotes().add(&remote_name, location)
    }

    pub fn rm_remote(&self, remote_name: &str) -> anyhow::Result<()> {
        let remote_name = parse_remote_name(remote_name)?;

        self.remotes().remove(&remote_name)
    }
}
