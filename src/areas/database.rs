//! Content-addressable blob store
//!
//! Blobs live under `.gitlet/objects/<first-2-chars>/<remaining-38-chars>` and are
//! written once per distinct content. Writes go through a temporary file in the
//! target directory followed by a rename.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
#[error("blob {0} not found in the object store")]
pub struct BlobNotFound(pub ObjectId);

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store `content` and return its id
    ///
    /// Storing content that is already present is a no-op returning the same id.
    pub fn put(&self, content: impl Into<Bytes>) -> anyhow::Result<ObjectId> {
        let blob = Blob::new(content.into());
        let blob_oid = blob.object_id()?;
        let object_path = self.path.join(blob_oid.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            debug!(oid = %blob_oid, "blob already stored");
            return Ok(blob_oid);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        Self::write_atomically(&object_path, &blob.serialize()?)?;
        debug!(oid = %blob_oid, "stored blob");

        Ok(blob_oid)
    }

    /// Load the content of a stored blob
    ///
    /// Fails with [`BlobNotFound`] when nothing is stored under `blob_oid`.
    pub fn get(&self, blob_oid: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(blob_oid.to_path());

        if !object_path.exists() {
            return Err(BlobNotFound(blob_oid.clone()).into());
        }

        let content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;
        let blob = Blob::deserialize(Cursor::new(content))?;

        Ok(blob.into_content())
    }

    pub fn contains(&self, blob_oid: &ObjectId) -> bool {
        self.path.join(blob_oid.to_path()).is_file()
    }

    /// Write `content` to `path` through a sibling temporary file and a rename
    pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let dir = path
            .parent()
            .context(format!("Invalid object path {}", path.display()))?;
        let temp_path = dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .context(format!("Unable to open file {}", temp_path.display()))?;

        file.write_all(content)
            .context(format!("Unable to write file {}", temp_path.display()))?;

        // rename the temp file to the target to make the write atomic
        std::fs::rename(&temp_path, path)
            .context(format!("Unable to rename file to {}", path.display()))?;

        Ok(())
    }

    fn generate_temp_name() -> PathBuf {
        PathBuf::from(format!("tmp-obj-{}", rand::random::<u32>()))
    }
}
