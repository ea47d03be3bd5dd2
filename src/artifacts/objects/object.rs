use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::hash_of(&content))
    }
}

pub(crate) fn sha1_hex(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);

    format!("{:x}", hasher.finalize())
}
