//! Commit object
//!
//! A commit is a node in the history DAG. Unlike git there is no tree object:
//! every commit carries the complete path → blob mapping of the files it tracks,
//! so no commit needs its ancestors to reconstruct its snapshot.
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! parent <parent-sha>              (zero, one or two lines)
//! date <unix-seconds> <+hhmm>
//! file <blob-sha> <path>           (one line per tracked file, sorted by path)
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Message of the root commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Tracked files of a commit, keyed by path
pub type FileMap = BTreeMap<PathBuf, ObjectId>;

/// Whether `path` fits on a `file` line and reads back unchanged
pub fn is_recordable_path(path: &Path) -> bool {
    path.to_str()
        .is_some_and(|path| !path.is_empty() && !path.contains(['\n', '\r']))
}

/// Slim representation of a commit
///
/// Contains only what graph traversals need, so history walks do not have to
/// keep whole file maps around.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Empty for the root commit, two entries for merge commits
    parents: Vec<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    files: FileMap,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        files: FileMap,
        message: String,
    ) -> Self {
        Commit {
            parents,
            timestamp,
            files,
            message,
        }
    }

    /// The root commit every repository starts from
    ///
    /// Its timestamp is pinned to the Unix epoch so independently initialised
    /// repositories share the same root digest.
    pub fn root() -> Self {
        Commit::new(
            Vec::new(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            FileMap::new(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, the one `log` follows
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp as printed by `log`, e.g. "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents.clone(),
        }
    }

    fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, offset) = value
            .split_once(' ')
            .context("Invalid commit object: malformed date line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: malformed timestamp")?;

        let sign = match offset.chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => anyhow::bail!("Invalid commit object: malformed timezone {:?}", offset),
        };
        let hours = offset
            .get(1..3)
            .and_then(|hours| hours.parse::<i32>().ok())
            .context("Invalid commit object: malformed timezone hours")?;
        let minutes = offset
            .get(3..5)
            .and_then(|minutes| minutes.parse::<i32>().ok())
            .context("Invalid commit object: malformed timezone minutes")?;
        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .context("Invalid commit object: timezone out of range")?;

        let utc = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;

        Ok(utc.with_timezone(&offset))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.files {
            anyhow::ensure!(
                is_recordable_path(path),
                "Cannot record file name {:?} in a commit",
                path
            );
            lines.push(format!("file {} {}", oid, path.display()));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        Ok(frame(&self.object_type(), lines.join("\n").as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut files = FileMap::new();

        for line in header.lines() {
            let (keyword, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {:?}", line))?;

            match keyword {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "date" => timestamp = Some(Self::parse_date(value)?),
                "file" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: malformed file line")?;
                    files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header {:?}", keyword),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing date line")?;

        Ok(Self::new(parents, timestamp, files, message.to_string()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
