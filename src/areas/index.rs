//! Staging area
//!
//! The staging area records what the next commit changes relative to the head
//! commit: paths staged for addition (with the blob id of the content to commit)
//! and paths staged for removal. A path is never in both sets.
//!
//! Staged content lives in the content store as soon as it is added, so the staging
//! area only needs ids. It is persisted as part of the repository state.

use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    additions: BTreeMap<PathBuf, ObjectId>,
    removals: BTreeSet<PathBuf>,
}

/// What `stage_add` did with a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Staged,
    /// The content matches the head commit, so nothing is staged for the path
    Unchanged,
}

impl Index {
    /// Stage `blob_oid` as the content of `path` for the next commit
    ///
    /// Clears any pending removal of `path`. When the head commit already tracks
    /// exactly this content the path ends up unstaged instead.
    pub fn stage_add(
        &mut self,
        path: PathBuf,
        blob_oid: ObjectId,
        head_manifest: &Manifest,
    ) -> AddOutcome {
        self.removals.remove(&path);

        if head_manifest.get(&path) == Some(&blob_oid) {
            self.additions.remove(&path);
            return AddOutcome::Unchanged;
        }

        self.additions.insert(path, blob_oid);
        AddOutcome::Staged
    }

    /// Unstage `path` and, if the head commit tracks it, stage it for removal
    ///
    /// Returns whether the path is tracked by the head commit, in which case the
    /// caller is expected to delete the working file too.
    pub fn stage_remove(
        &mut self,
        path: &Path,
        head_manifest: &Manifest,
    ) -> Result<bool, GitletError> {
        let was_staged = self.additions.remove(path).is_some();
        let is_tracked = head_manifest.contains_key(path);

        if !was_staged && !is_tracked {
            return Err(GitletError::NoReasonToRemove(path.to_path_buf()));
        }

        if is_tracked {
            self.removals.insert(path.to_path_buf());
        }

        Ok(is_tracked)
    }

    /// Stage `path` for removal unconditionally
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.additions.remove(&path);
        self.removals.insert(path);
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn additions(&self) -> &BTreeMap<PathBuf, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<PathBuf> {
        &self.removals
    }

    pub fn staged_blob(&self, path: &Path) -> Option<&ObjectId> {
        self.additions.get(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.additions.contains_key(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removals.contains(path)
    }

    /// The manifest obtained by applying the staged changes on top of `base`
    pub fn apply_to(&self, base: &Manifest) -> Manifest {
        let mut manifest = base.clone();

        for path in &self.removals {
            manifest.remove(path);
        }
        manifest.extend(
            self.additions
                .iter()
                .map(|(path, blob_oid)| (path.clone(), blob_oid.clone())),
        );

        manifest
    }
}
