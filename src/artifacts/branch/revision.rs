use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::collections::BTreeSet;

/// A commit id as typed by the user: the full 40 hex digits or any prefix of them.
///
/// A revision resolves against the set of known commit ids. It names a commit only
/// when exactly one known id starts with it.
///
/// # Examples
///
/// ```ignore
/// let revision = Revision::try_parse("3f2a")?;
/// let commit_oid = revision.resolve(repository.commit_ids())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    /// Accept a non-empty string of at most 40 hex digits
    ///
    /// Anything else can never match a commit id and is reported as an unknown commit.
    pub fn try_parse(revision: &str) -> Result<Revision, GitletError> {
        if revision.is_empty()
            || revision.len() > OBJECT_ID_LENGTH
            || !revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(GitletError::NoSuchCommit(revision.to_string()));
        }

        Ok(Revision(revision.to_ascii_lowercase()))
    }

    pub fn resolve(&self, known: &BTreeSet<ObjectId>) -> Result<ObjectId, GitletError> {
        let matches = self.candidates(known);

        match matches.as_slice() {
            [] => Err(GitletError::NoSuchCommit(self.0.clone())),
            [oid] => Ok((*oid).clone()),
            _ => Err(GitletError::AmbiguousCommitId(self.0.clone())),
        }
    }

    /// Known ids starting with this revision, in id order
    pub fn candidates<'a>(&self, known: &'a BTreeSet<ObjectId>) -> Vec<&'a ObjectId> {
        // the prefix padded with zeros is the smallest id that can start with it
        let padded = format!("{:0<width$}", self.0, width = OBJECT_ID_LENGTH);
        let Ok(lower_bound) = ObjectId::try_parse(padded) else {
            return Vec::new();
        };

        known
            .range(lower_bound..)
            .take_while(|oid| oid.starts_with(&self.0))
            .collect()
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
