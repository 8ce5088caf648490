//! Staging entries
//!
//! The staging file holds two kinds of records: paths staged for addition,
//! each with the digest of the blob written at `add` time, and paths staged
//! for removal. Paths are length-prefixed rather than NUL-padded.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Maximum path length supported in index entries
const MAX_PATH_SIZE: usize = u16::MAX as usize;

/// Path staged for addition, with the blob recorded for it
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct AddedEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
}

/// Path staged for removal
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RemovedEntry {
    pub path: PathBuf,
}

impl AddedEntry {
    pub(crate) fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        let digest = reader.read(OBJECT_ID_LENGTH / 2)?;
        let oid = ObjectId::from_digest(&digest)?;
        let path = read_path(reader)?;

        Ok(AddedEntry { path, oid })
    }
}

impl RemovedEntry {
    pub(crate) fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        Ok(RemovedEntry {
            path: read_path(reader)?,
        })
    }
}

impl Packable for AddedEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();
        self.oid.write_h40_to(&mut bytes)?;
        write_path(&mut bytes, &self.path)?;

        Ok(Bytes::from(bytes))
    }
}

impl Packable for RemovedEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();
        write_path(&mut bytes, &self.path)?;

        Ok(Bytes::from(bytes))
    }
}

fn write_path(bytes: &mut Vec<u8>, path: &Path) -> anyhow::Result<()> {
    let path = path.to_string_lossy();
    if path.len() > MAX_PATH_SIZE {
        anyhow::bail!("Path {} is too long to be staged", path);
    }

    bytes.write_u16::<byteorder::NetworkEndian>(path.len() as u16)?;
    bytes.write_all(path.as_bytes())?;

    Ok(())
}

fn read_path(reader: &mut Checksum) -> anyhow::Result<PathBuf> {
    let length = byteorder::NetworkEndian::read_u16(&reader.read(2)?) as usize;
    let path = reader.read(length)?;
    let path = String::from_utf8(path.to_vec()).context("Index entry path is not UTF-8")?;

    Ok(PathBuf::from(path))
}
