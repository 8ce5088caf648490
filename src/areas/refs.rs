//! Branch table and HEAD
//!
//! Every branch is a file under `refs/heads/` holding the 40-character digest of
//! its tip commit. Hierarchical names map onto nested directories, which is how
//! tracking branches such as `origin/master` are stored.
//!
//! HEAD is always symbolic: it holds `ref: refs/heads/<branch>` and its commit
//! is whatever that branch points at. There is no detached state.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.sprig`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .with_context(|| format!("HEAD is not a symbolic ref: {:?}", content))?;

        BranchName::try_parse_sym_ref_name(&SymRefName::new(symref_match[1].to_string()))
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    /// Point HEAD at `branch_name`; the branch itself is left untouched
    pub fn set_head_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let sym_ref = SymRefName::for_branch(branch_name);
        tracing::debug!(branch = %branch_name, "moving HEAD");

        self.update_ref_file(
            self.head_path(),
            format!("ref: {}", sym_ref.as_ref_path()),
        )
    }

    /// Commit the current branch points at
    pub fn read_head(&self) -> anyhow::Result<ObjectId> {
        let branch_name = self.current_branch()?;

        self.read_branch(&branch_name)?
            .with_context(|| format!("current branch {} has no commit", branch_name))
    }

    /// Advance the current branch (and therefore HEAD) to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_name = self.current_branch()?;
        self.update_branch(&branch_name, oid)
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let oid = ObjectId::try_parse(content.trim().to_string())
            .with_context(|| format!("malformed ref file at {:?}", branch_path))?;

        Ok(Some(oid))
    }

    pub fn create_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_path(branch_name).is_file() {
            return Err(RepositoryError::BranchExists(branch_name.to_string()).into());
        }

        self.update_branch(branch_name, oid)
    }

    /// Create or move `branch_name` to `oid`
    ///
    /// Fails with `BranchNameClash` when the name nests under an existing
    /// branch (`a` blocks `a/b`) or existing branches nest under it.
    pub fn update_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.clashes_with_existing_branch(branch_name) {
            return Err(RepositoryError::BranchNameClash(branch_name.to_string()).into());
        }

        tracing::debug!(branch = %branch_name, %oid, "updating branch");
        self.update_ref_file(self.branch_path(branch_name), oid.to_string())
    }

    /// Remove the pointer only; the commits it referenced stay in the store
    pub fn delete_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(branch_name);

        match self.read_branch(branch_name)? {
            Some(oid) => {
                std::fs::remove_file(&branch_path).with_context(|| {
                    format!("failed to delete branch file at {:?}", branch_path)
                })?;
                self.prune_branch_empty_parent_dirs(&branch_path)?;
                tracing::debug!(branch = %branch_name, %oid, "deleted branch");

                Ok(oid)
            }
            None => Err(RepositoryError::NoSuchBranch(branch_name.to_string()).into()),
        }
    }

    /// All branches, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path)?;
                BranchName::try_parse(relative_path.to_string_lossy().replace('\\', "/"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn clashes_with_existing_branch(&self, branch_name: &BranchName) -> bool {
        let heads_path = self.heads_path();
        let branch_path = self.branch_path(branch_name);

        branch_path.is_dir()
            || branch_path
                .ancestors()
                .skip(1)
                .take_while(|parent| *parent != heads_path.as_ref())
                .any(Path::is_file)
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
