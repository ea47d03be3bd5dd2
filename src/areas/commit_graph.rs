//! Commit graph
//!
//! Commits are stored one record per file under `.gitlet/commits/<id>` and are never
//! rewritten. Parent links are ids, never owned references: a commit's id depends on
//! its parents' ids, so the graph is acyclic by construction.
//!
//! Loaded commits are cached for the lifetime of the graph, which is one command.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub struct CommitGraph {
    path: Box<Path>,
    cache: RefCell<HashMap<ObjectId, Commit>>,
}

impl CommitGraph {
    pub fn new(path: Box<Path>) -> Self {
        CommitGraph {
            path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Write the root commit and return it
    pub fn create_root(&self) -> anyhow::Result<Commit> {
        let root = Commit::root();
        self.store(&root)?;

        Ok(root)
    }

    /// Build, persist and return a commit on top of `parents`
    ///
    /// The new manifest starts from the first parent's full manifest, drops every
    /// path staged for removal and applies every staged addition, so files the
    /// staging area does not mention are carried forward unchanged.
    pub fn create(
        &self,
        message: &str,
        staged: &Index,
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
    ) -> anyhow::Result<Commit> {
        let base_manifest = match parents.first() {
            Some(first_parent) => self.load(first_parent)?.manifest().clone(),
            None => Default::default(),
        };
        let manifest = staged.apply_to(&base_manifest);

        let commit = Commit::new(parents, timestamp, manifest, message.to_string());
        self.store(&commit)?;
        info!(
            oid = %commit.oid(),
            parents = commit.parents().len(),
            files = commit.manifest().len(),
            "created commit"
        );

        Ok(commit)
    }

    /// Load a commit by its full id
    pub fn load(&self, commit_oid: &ObjectId) -> anyhow::Result<Commit> {
        if let Some(commit) = self.cache.borrow().get(commit_oid) {
            return Ok(commit.clone());
        }

        let commit_path = self.path.join(commit_oid.as_ref());
        let content = std::fs::read(&commit_path).with_context(|| {
            format!("Unable to read commit record {}", commit_path.display())
        })?;
        let commit = Commit::deserialize(Cursor::new(content))
            .with_context(|| format!("Corrupt commit record {}", commit_oid))?;

        if commit.oid() != commit_oid {
            anyhow::bail!(
                "Commit record {} hashes to {}, the record is corrupt",
                commit_oid,
                commit.oid()
            );
        }

        self.cache
            .borrow_mut()
            .insert(commit_oid.clone(), commit.clone());

        Ok(commit)
    }

    /// Ids reachable from `commit_oid`, starting with `commit_oid` itself
    ///
    /// With `first_parent_only` the walk follows first parents and yields the linear
    /// history used by `log` and split-point discovery. Otherwise every parent is
    /// followed breadth-first and each id appears once.
    pub fn ancestor_chain(
        &self,
        commit_oid: &ObjectId,
        first_parent_only: bool,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = Vec::new();

        if first_parent_only {
            let mut current = Some(commit_oid.clone());
            while let Some(oid) = current {
                current = self.load(&oid)?.parent().cloned();
                chain.push(oid);
            }

            return Ok(chain);
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([commit_oid.clone()]);
        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            queue.extend(self.load(&oid)?.parents().iter().cloned());
            chain.push(oid);
        }

        Ok(chain)
    }

    /// Ids among `known` whose commit message equals `message`
    pub fn find_by_message(
        &self,
        known: &BTreeSet<ObjectId>,
        message: &str,
    ) -> anyhow::Result<BTreeSet<ObjectId>> {
        let mut found = BTreeSet::new();

        for commit_oid in known {
            if self.load(commit_oid)?.message() == message {
                found.insert(commit_oid.clone());
            }
        }

        Ok(found)
    }

    fn store(&self, commit: &Commit) -> anyhow::Result<()> {
        let commit_path = self.path.join(commit.oid().as_ref());

        if !commit_path.exists() {
            std::fs::create_dir_all(&self.path).with_context(|| {
                format!("Unable to create commits directory {}", self.path.display())
            })?;
            Database::write_atomically(&commit_path, &commit.serialize()?)?;
        } else {
            debug!(oid = %commit.oid(), "commit record already present");
        }

        self.cache
            .borrow_mut()
            .insert(commit.oid().clone(), commit.clone());

        Ok(())
    }
}
