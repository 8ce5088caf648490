//! Stored object types
//!
//! Two kinds of immutable objects live in the store:
//!
//! - **Blob**: one file's path and bytes at the moment it was staged
//! - **Commit**: a complete path → blob snapshot plus message, timestamp and parents
//!
//! Both serialize to a canonical form `<type> <size>\0<content>`; the SHA-1 of
//! that form is the object's identity.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form printed for merge parents
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
