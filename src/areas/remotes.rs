//! Registered remotes
//!
//! A remote is another repository on the same filesystem. Each registration is
//! a file `remotes/<name>` holding the location as given to `add-remote`, which
//! is either the other repository's root or its metadata directory. Relative
//! locations are resolved against this repository's root.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::METADATA_DIR;
use crate::artifacts::branch::branch_name::RemoteName;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Remotes {
    /// Path to the remotes directory (typically `.sprig/remotes`)
    path: Box<Path>,
    /// Root of the local working tree
    root: Box<Path>,
}

/// Object store and branch table of a remote, opened as a second handle
#[derive(Debug)]
pub struct RemoteRepository {
    database: Database,
    refs: Refs,
}

impl RemoteRepository {
    /// Open the repository whose metadata directory is `metadata_path`
    pub fn open(metadata_path: &Path) -> Self {
        RemoteRepository {
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            refs: Refs::new(metadata_path.to_path_buf().into_boxed_path()),
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}

impl Remotes {
    pub fn new(path: Box<Path>, root: Box<Path>) -> Self {
        Remotes { path, root }
    }

    pub fn add(&self, name: &RemoteName, location: &str) -> anyhow::Result<()> {
        let remote_path = self.remote_path(name);
        if remote_path.exists() {
            return Err(RepositoryError::RemoteExists(name.to_string()).into());
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create remotes directory at {:?}", self.path))?;

        let location = location.replace('/', std::path::MAIN_SEPARATOR_STR);
        std::fs::write(&remote_path, location)
            .with_context(|| format!("failed to write remote file at {:?}", remote_path))?;
        tracing::debug!(remote = %name, "registered remote");

        Ok(())
    }

    pub fn remove(&self, name: &RemoteName) -> anyhow::Result<()> {
        let remote_path = self.remote_path(name);
        if !remote_path.is_file() {
            return Err(RepositoryError::NoSuchRemote(name.to_string()).into());
        }

        std::fs::remove_file(&remote_path)
            .with_context(|| format!("failed to delete remote file at {:?}", remote_path))
    }

    /// Location of a registered remote, resolved against the local root
    pub fn location(&self, name: &RemoteName) -> anyhow::Result<PathBuf> {
        let remote_path = self.remote_path(name);
        if !remote_path.is_file() {
            return Err(RepositoryError::NoSuchRemote(name.to_string()).into());
        }

        let location = std::fs::read_to_string(&remote_path)
            .with_context(|| format!("failed to read remote file at {:?}", remote_path))?;

        Ok(self.root.join(location.trim()))
    }

    /// Open a registered remote, failing with `RemoteNotFound` if its
    /// location holds no repository
    pub fn open(&self, name: &RemoteName) -> anyhow::Result<RemoteRepository> {
        let location = self.location(name)?;

        let metadata_path = if location.join(METADATA_DIR).is_dir() {
            location.join(METADATA_DIR)
        } else if location.join("objects").is_dir() {
            location.clone()
        } else {
            return Err(RepositoryError::RemoteNotFound(location).into());
        };
        tracing::debug!(remote = %name, path = ?metadata_path, "opened remote");

        Ok(RemoteRepository::open(&metadata_path))
    }

    fn remote_path(&self, name: &RemoteName) -> PathBuf {
        self.path.join(name.as_ref())
    }
}
