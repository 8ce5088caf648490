//! Staging area
//!
//! The staging area records what the next commit will change relative to HEAD:
//! paths staged for addition (with the blob written at `add` time) and paths
//! staged for removal. A path is never in both sets at once.
//!
//! ## Index File Format
//!
//! The index file contains:
//! - Header: signature, version and the size of both sets
//! - Added entries sorted by path, then removed entries sorted by path
//! - Checksum: SHA-1 hash of the entire index for integrity verification

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::{AddedEntry, RemovedEntry};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.sprig/index`)
    path: Box<Path>,
    /// Paths staged for addition mapped to their blob
    added: BTreeMap<PathBuf, ObjectId>,
    /// Paths staged for removal
    removed: BTreeSet<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing or empty file is an empty staging area. A checksum mismatch
    /// means the file is corrupt and is reported as an error.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.added.clear();
        self.removed.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let header = self.parse_header(&mut reader)?;

        for _ in 0..header.added_count {
            let entry = AddedEntry::read_from(&mut reader)?;
            self.added.insert(entry.path, entry.oid);
        }
        for _ in 0..header.removed_count {
            let entry = RemovedEntry::read_from(&mut reader)?;
            self.removed.insert(entry.path);
        }

        reader
            .verify()
            .with_context(|| format!("Corrupt index file {}", self.path.display()))
    }

    fn parse_header(&self, reader: &mut Checksum) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    /// Persist the index if it changed since it was loaded
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header = IndexHeader {
            added_count: self.added.len() as u32,
            removed_count: self.removed.len() as u32,
            ..IndexHeader::empty()
        };
        writer.write(&header.serialize()?)?;

        for (path, oid) in &self.added {
            let entry = AddedEntry::new(path.clone(), oid.clone());
            writer.write(&entry.serialize()?)?;
        }
        for path in &self.removed {
            let entry = RemovedEntry::new(path.clone());
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        Ok(())
    }

    /// Record `path` → `oid` for the next commit, dropping any removal marker
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) {
        self.removed.remove(&path);
        self.added.insert(path, oid);
        self.changed = true;
    }

    /// Drop a staged addition; returns whether there was one
    pub fn unstage(&mut self, path: &Path) -> bool {
        let unstaged = self.added.remove(path).is_some();
        self.changed |= unstaged;
        unstaged
    }

    /// Record `path` for removal, dropping any staged addition
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.added.remove(&path);
        self.removed.insert(path);
        self.changed = true;
    }

    /// Drop a removal marker; returns whether there was one
    pub fn unmark_removed(&mut self, path: &Path) -> bool {
        let unmarked = self.removed.remove(path);
        self.changed |= unmarked;
        unmarked
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.changed = true;
        }
        self.added.clear();
        self.removed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn added(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<PathBuf> {
        &self.removed
    }

    pub fn staged_blob(&self, path: &Path) -> Option<&ObjectId> {
        self.added.get(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }
}
