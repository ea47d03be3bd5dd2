//! Branch table
//!
//! Branches are named, mutable pointers into the commit graph. Exactly one branch
//! is current; its head is the repository's head commit. The table is persisted as
//! part of the repository state.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    branches: BTreeMap<BranchName, ObjectId>,
    current: BranchName,
}

impl Refs {
    /// A table holding only `initial`, which is current
    pub fn new(initial: BranchName, head_oid: ObjectId) -> Self {
        Refs {
            branches: BTreeMap::from([(initial.clone(), head_oid)]),
            current: initial,
        }
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current
    }

    pub fn is_current_branch(&self, name: &BranchName) -> bool {
        &self.current == name
    }

    /// Head commit of the current branch
    pub fn head(&self) -> anyhow::Result<&ObjectId> {
        self.branches
            .get(&self.current)
            .with_context(|| format!("current branch {} has no head commit", self.current))
    }

    pub fn get(&self, name: &BranchName) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    /// Branch names with their heads, sorted by name
    pub fn list(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }

    /// Create `name` pointing at the current head
    pub fn create(&mut self, name: BranchName) -> anyhow::Result<&ObjectId> {
        if self.branches.contains_key(&name) {
            return Err(GitletError::BranchAlreadyExists(name.to_string()).into());
        }

        let head_oid = self.head()?.clone();
        debug!(branch = %name, head = %head_oid, "created branch");

        Ok(self.branches.entry(name).or_insert(head_oid))
    }

    /// Delete `name`; its commits stay in the graph
    pub fn remove(&mut self, name: &BranchName) -> anyhow::Result<ObjectId> {
        if !self.branches.contains_key(name) {
            return Err(GitletError::BranchNotFound(name.to_string()).into());
        }
        if self.is_current_branch(name) {
            return Err(GitletError::CannotRemoveCurrentBranch(name.to_string()).into());
        }

        let head_oid = self
            .branches
            .remove(name)
            .with_context(|| format!("branch {name} vanished while removing it"))?;
        debug!(branch = %name, head = %head_oid, "removed branch");

        Ok(head_oid)
    }

    pub fn set_current(&mut self, name: &BranchName) -> anyhow::Result<()> {
        if !self.branches.contains_key(name) {
            return Err(GitletError::NoSuchBranch(name.to_string()).into());
        }

        self.current = name.clone();

        Ok(())
    }

    /// Move `name` to `target_oid` without creating a commit
    pub fn fast_forward(&mut self, name: &BranchName, target_oid: ObjectId) -> anyhow::Result<()> {
        let head = self
            .branches
            .get_mut(name)
            .ok_or_else(|| GitletError::BranchNotFound(name.to_string()))?;
        debug!(branch = %name, from = %head, to = %target_oid, "moved branch");
        *head = target_oid;

        Ok(())
    }

    /// Move the current branch to `target_oid`
    pub fn advance_current(&mut self, target_oid: ObjectId) -> anyhow::Result<()> {
        let current = self.current.clone();
        self.fast_forward(&current, target_oid)
    }
}
