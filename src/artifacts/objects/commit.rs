//! Commit object
//!
//! Commits are immutable snapshots of the tracked file set. They contain:
//! - Parent commit ID(s): none for the root commit, one normally, two for merges
//! - A timestamp with its UTC offset
//! - The full manifest, mapping every tracked path to a blob id
//! - The commit message
//!
//! ## Format
//!
//! On disk (and as hashed to produce the commit id):
//! ```text
//! parent <parent-sha>
//! timestamp <unix-seconds> <+hhmm>
//! blob <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! Manifest lines are sorted by path, so the id only depends on the message, the
//! timestamp, the set of tracked files and the ordered parents.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Tracked path -> blob id, sorted by path
pub type Manifest = BTreeMap<PathBuf, ObjectId>;

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable that pins the timestamp of new commits
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    manifest: Manifest,
    message: String,
}

impl Commit {
    /// Create a new commit, computing its id from the canonical record
    pub fn new(
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        manifest: Manifest,
        message: String,
    ) -> Self {
        let record = Self::canonical_record(&parents, &timestamp, &manifest, &message);
        let oid = ObjectId::hash_of(record.as_bytes());

        Commit {
            oid,
            parents,
            timestamp,
            manifest,
            message,
        }
    }

    /// The root commit every repository starts from
    ///
    /// It has no parents, tracks nothing and is dated at the Unix epoch, so every
    /// freshly initialized repository shares the same root id.
    pub fn root() -> Self {
        Self::new(
            Vec::new(),
            DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset(),
            Manifest::new(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    /// Timestamp for a new commit
    ///
    /// Uses `GITLET_COMMIT_DATE` when set and parseable (RFC 2822 or
    /// `%Y-%m-%d %H:%M:%S %z`), the local clock otherwise.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Blob id tracked for `path`, if this commit tracks it
    pub fn blob_for(&self, path: &Path) -> Option<&ObjectId> {
        self.manifest.get(path)
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.manifest.contains_key(path)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn canonical_record(
        parents: &[ObjectId],
        timestamp: &DateTime<FixedOffset>,
        manifest: &Manifest,
        message: &str,
    ) -> String {
        let mut lines = vec![];

        for parent in parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!(
            "timestamp {} {}",
            timestamp.timestamp(),
            timestamp.format("%z")
        ));
        for (path, blob_oid) in manifest {
            lines.push(format!("blob {} {}", blob_oid.as_ref(), path.display()));
        }
        lines.push(String::new());
        lines.push(message.to_string());

        lines.join("\n")
    }

    fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, offset) = value
            .split_once(' ')
            .context("Invalid commit object: malformed timestamp")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: malformed timestamp seconds")?;

        let (sign, digits) = match offset.split_at_checked(1) {
            Some(("+", digits)) => (1, digits),
            Some(("-", digits)) => (-1, digits),
            _ => anyhow::bail!("Invalid commit object: malformed timezone {offset}"),
        };
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Invalid commit object: malformed timezone {offset}");
        }
        let hours = digits[..2].parse::<i32>()?;
        let minutes = digits[2..].parse::<i32>()?;
        let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .context("Invalid commit object: timezone out of range")?;

        let utc = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;

        Ok(utc.with_timezone(&offset))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let record = Self::canonical_record(
            &self.parents,
            &self.timestamp,
            &self.manifest,
            &self.message,
        );

        Ok(Bytes::from(record))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut manifest = Manifest::new();

        for line in header.lines() {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(value) = line.strip_prefix("timestamp ") {
                timestamp = Some(Self::parse_timestamp(value)?);
            } else if let Some(entry) = line.strip_prefix("blob ") {
                let (blob_oid, path) = entry
                    .split_once(' ')
                    .context("Invalid commit object: malformed blob line")?;
                manifest.insert(
                    PathBuf::from(path),
                    ObjectId::try_parse(blob_oid.to_string())?,
                );
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing timestamp line")?;

        Ok(Self::new(parents, timestamp, manifest, message.to_string()))
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        Self::canonical_record(
            &self.parents,
            &self.timestamp,
            &self.manifest,
            &self.message,
        )
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.oid.clone())
    }
}
