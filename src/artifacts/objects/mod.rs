//! Content-addressed objects
//!
//! Gitlet stores two kinds of objects, both identified by SHA-1 hashes:
//!
//! - **Blob**: raw file content, hashed as-is
//! - **Commit**: a full manifest (path -> blob id), ordered parent ids, a timestamp
//!   and a message, hashed over its canonical text record
//!
//! Both implement [`object::Packable`] so that the bytes written to disk are exactly
//! the bytes that produce the object's id.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
