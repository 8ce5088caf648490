//! Per-file merge decisions
//!
//! Files are compared as whole units by blob digest; nothing is merged line by
//! line. For each path tracked by the split point, the current commit or the
//! given commit:
//!
//! | current vs given | split vs current | split vs given | result            |
//! |------------------|------------------|----------------|-------------------|
//! | equal            | any              | any            | keep              |
//! | differ           | equal            | any            | take given's side |
//! | differ           | differ           | equal          | keep              |
//! | differ           | differ           | differ         | conflict          |
//!
//! "Taking given's side" deletes the file when the given commit dropped it.

use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResolution {
    /// The current commit already holds the result
    Keep,
    /// Check out and stage the given commit's blob
    TakeGiven(ObjectId),
    /// Stage the removal and delete the file
    Remove,
    /// Both sides changed the file differently
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

pub fn resolve_file(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> FileResolution {
    if current == given {
        FileResolution::Keep
    } else if split == current {
        match given {
            Some(given) => FileResolution::TakeGiven(given.clone()),
            None => FileResolution::Remove,
        }
    } else if split == given {
        FileResolution::Keep
    } else {
        FileResolution::Conflict {
            current: current.cloned(),
            given: given.cloned(),
        }
    }
}

/// Conflict file embedding both versions verbatim; a missing side is empty
pub fn render_conflict(current: &[u8], given: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(current.len() + given.len() + 32);
    content.extend_from_slice(b"<<<<<<< HEAD\n");
    content.extend_from_slice(current);
    content.extend_from_slice(b"=======\n");
    content.extend_from_slice(given);
    content.extend_from_slice(b">>>>>>>\n");

    content
}
