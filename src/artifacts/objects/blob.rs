//! Blob object
//!
//! A blob records one file's bytes together with the path it was staged under.
//! The path takes part in the digest, so the same bytes staged under two names
//! produce two distinct blobs.
//!
//! ## Format
//!
//! `blob <size>\0<path>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Path relative to the working tree root
    path: PathBuf,
    /// Raw file content
    content: Bytes,
}

impl Blob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self.path.to_string_lossy();

        let mut content = Vec::with_capacity(path.len() + 1 + self.content.len());
        content.extend_from_slice(path.as_bytes());
        content.push(b'\0');
        content.extend_from_slice(&self.content);

        Ok(frame(&self.object_type(), &content))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let mut path = Vec::new();
        reader.read_until(b'\0', &mut path)?;
        if path.pop() != Some(b'\0') {
            anyhow::bail!("Invalid blob object: missing path terminator");
        }
        let path = String::from_utf8(path).context("Invalid blob object: path is not UTF-8")?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(PathBuf::from(path), content.into()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
