//! Blob object
//!
//! Blobs store file content. They contain only the raw file data, without any
//! metadata like the file name (the commit manifest maps names to blob ids).
//!
//! On disk a blob is its content, byte for byte, so its id is the SHA-1 of the
//! file contents.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl From<&[u8]> for Blob {
    fn from(value: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}
