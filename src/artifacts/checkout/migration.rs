//! Checkout migration
//!
//! Moving the working directory from one commit's tree to another's:
//!
//! 1. Compare the current head manifest with the target manifest
//! 2. Refuse when an untracked working file would be overwritten
//! 3. Write every file of the target tree and delete the files only the current
//!    head tracks
//!
//! Untracked files the target does not mention are left alone. Every check runs
//! before the first file is touched.

use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create a file the current head does not track
    Add,
    /// Delete a file the target does not track
    Delete,
    /// Rewrite a file tracked on both sides with the target's content
    Modify,
}

/// Planned actions grouped by type, each list sorted by path
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    actions: ActionsSet,
}

impl Migration {
    pub fn new(current: &Manifest, target: &Manifest) -> Self {
        let mut actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        for (path, blob_oid) in target {
            let action = if current.contains_key(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };

            actions
                .entry(action)
                .or_default()
                .push((path.clone(), Some(blob_oid.clone())));
        }

        for path in current.keys().filter(|path| !target.contains_key(*path)) {
            actions
                .entry(ActionType::Delete)
                .or_default()
                .push((path.clone(), None));
        }

        Migration { actions }
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    /// Paths written by the migration that are not tracked by the current head
    pub fn added_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.actions
            .get(&ActionType::Add)
            .into_iter()
            .flatten()
            .map(|(path, _)| path)
    }

    /// Fail when any of `untracked` would be overwritten
    pub fn check_untracked(&self, untracked: &BTreeSet<PathBuf>) -> Result<(), GitletError> {
        let in_the_way = self
            .added_paths()
            .filter(|path| untracked.contains(*path))
            .cloned()
            .collect::<Vec<_>>();

        if in_the_way.is_empty() {
            Ok(())
        } else {
            Err(GitletError::UntrackedFileInTheWay(in_the_way))
        }
    }
}
