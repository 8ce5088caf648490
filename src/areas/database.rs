//! Object store
//!
//! Append-only, content-addressed storage for blobs and commits. Each object is
//! zlib-compressed and written to `objects/<2 hex>/<38 hex>` through a temporary
//! file that is renamed into place, so readers never observe a partial object.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    /// Parent links of commits already read during this invocation
    commit_cache: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            path,
            commit_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store `object` under its own digest; storing it again is a no-op
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            let object_content = object.serialize()?;
            self.write_object(&object_path, Self::compress(object_content)?)?;
            tracing::trace!(oid = %object_id, kind = %object.object_type(), "stored object");
        }

        Ok(object_id)
    }

    /// Copy the raw stored form of `object_id` into `target`
    ///
    /// Returns false if `target` already had it.
    pub fn copy_object_to(&self, target: &Database, object_id: &ObjectId) -> anyhow::Result<bool> {
        if target.contains(object_id) {
            return Ok(false);
        }

        let source_path = self.path.join(object_id.to_path());
        let compressed = std::fs::read(&source_path).with_context(|| {
            format!("Unable to read object file {}", source_path.display())
        })?;

        target.write_object(&target.path.join(object_id.to_path()), compressed.into())?;
        tracing::trace!(oid = %object_id, "copied object");

        Ok(true)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        match self.parse_object(object_id)? {
            ObjectBox::Blob(blob) => Ok(*blob),
            ObjectBox::Commit(_) => anyhow::bail!("Object {} is not a blob", object_id),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        match self.parse_object(object_id)? {
            ObjectBox::Commit(commit) => Ok(*commit),
            ObjectBox::Blob(_) => anyhow::bail!("Object {} is not a commit", object_id),
        }
    }

    /// Parent links of a commit, read once and cached
    pub fn load_slim_commit(&self, object_id: &ObjectId) -> anyhow::Result<SlimCommit> {
        if let Some(slim) = self.commit_cache.borrow().get(object_id) {
            return Ok(slim.clone());
        }

        let slim = self.parse_object_as_commit(object_id)?.to_slim(object_id.clone());
        self.commit_cache
            .borrow_mut()
            .insert(object_id.clone(), slim.clone());

        Ok(slim)
    }

    pub fn get_object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        let (object_type, _) = self.parse_object_as_bytes(object_id)?;
        Ok(object_type)
    }

    /// Resolve a full or abbreviated commit id
    ///
    /// Blobs sharing the prefix are ignored. No match is `NoSuchCommit`, more
    /// than one commit match is `AmbiguousCommitId`.
    pub fn resolve_commit_id(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RepositoryError::NoSuchCommit(prefix.to_string()).into());
        }

        let mut candidates = Vec::new();
        for object_id in self.find_objects_by_prefix(prefix)? {
            if self.get_object_type(&object_id)? == ObjectType::Commit {
                candidates.push(object_id);
            }
        }

        match candidates.len() {
            0 => Err(RepositoryError::NoSuchCommit(prefix.to_string()).into()),
            1 => Ok(candidates.remove(0)),
            _ => Err(RepositoryError::AmbiguousCommitId(prefix.to_string()).into()),
        }
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// For prefixes of 2+ characters only the matching fan-out directory is
    /// searched; shorter prefixes scan the whole store.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();

        if prefix.len() >= 2 {
            let dir_path = self.path.join(&prefix[..2]);
            if !dir_path.is_dir() {
                return Ok(Vec::new());
            }

            let mut matches = Vec::new();
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                if let Ok(oid) = ObjectId::try_from_path(&entry.path())
                    && oid.starts_with(&prefix)
                {
                    matches.push(oid);
                }
            }
            matches.sort();

            Ok(matches)
        } else {
            Ok(self
                .list_objects()?
                .into_iter()
                .filter(|oid| oid.starts_with(&prefix))
                .collect())
        }
    }

    /// Every object in the store, sorted by id
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut objects = WalkDir::new(&self.path)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| ObjectId::try_from_path(entry.path()).ok())
            .collect::<Vec<_>>();
        objects.sort();

        Ok(objects)
    }

    /// Every commit in the store with its id
    pub fn list_commits(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        let mut commits = Vec::new();

        for object_id in self.list_objects()? {
            if let ObjectBox::Commit(commit) = self.parse_object(&object_id)? {
                commits.push((object_id, *commit));
            }
        }

        Ok(commits)
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).with_context(|| {
            format!("Object not found: unable to read {}", object_path.display())
        })?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: &Path, compressed_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .with_context(|| {
                format!("Unable to open object file {}", temp_object_path.display())
            })?;

        file.write_all(&compressed_content).with_context(|| {
            format!("Unable to write object file {}", temp_object_path.display())
        })?;

        // the rename is what makes the object visible
        std::fs::rename(&temp_object_path, object_path).with_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
