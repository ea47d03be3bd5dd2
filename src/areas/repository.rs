//! Repository aggregate
//!
//! A repository is opened once per command: the persisted state is read from
//! `.gitlet/STATE`, the command mutates it in memory and writes it back as a whole.
//! Nothing in between is observable by another invocation.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cell::{RefCell, RefMut};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory whose presence marks an initialized repository
pub const GITLET_DIR: &str = ".gitlet";
const STATE_FILE: &str = "STATE";
const OBJECTS_DIR: &str = "objects";
const COMMITS_DIR: &str = "commits";

/// Everything a command can change, persisted as one JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub refs: Refs,
    pub index: Index,
    pub commit_ids: BTreeSet<ObjectId>,
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    commits: CommitGraph,
    workspace: Workspace,
    state: RepositoryState,
}

impl Repository {
    /// Assemble a repository rooted at `path` around an already loaded state
    pub(crate) fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        state: RepositoryState,
    ) -> Self {
        let gitlet_path = path.join(GITLET_DIR);

        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            database: Database::new(gitlet_path.join(OBJECTS_DIR).into_boxed_path()),
            commits: CommitGraph::new(gitlet_path.join(COMMITS_DIR).into_boxed_path()),
            workspace: Workspace::new(path.into()),
            state,
        }
    }

    /// Open the repository rooted at `path`
    ///
    /// Fails with [`GitletError::NotInitialized`] when `path` has no `.gitlet`
    /// directory.
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let gitlet_path = path.join(GITLET_DIR);
        if !gitlet_path.is_dir() {
            return Err(GitletError::NotInitialized.into());
        }

        let state_path = gitlet_path.join(STATE_FILE);
        let content = std::fs::read(&state_path)
            .with_context(|| format!("Unable to read {}", state_path.display()))?;
        let state: RepositoryState = serde_json::from_slice(&content)
            .with_context(|| format!("Corrupt repository state {}", state_path.display()))?;
        debug!(
            path = %path.display(),
            branch = %state.refs.current_branch(),
            commits = state.commit_ids.len(),
            "opened repository"
        );

        Ok(Self::new(path, writer, state))
    }

    /// Write the in-memory state back to `.gitlet/STATE`
    pub fn persist(&self) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(&self.state)
            .context("Unable to serialize repository state")?;

        Database::write_atomically(&self.state_path(), &content)
    }

    fn state_path(&self) -> PathBuf {
        self.path.join(GITLET_DIR).join(STATE_FILE)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commits(&self) -> &CommitGraph {
        &self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn refs(&self) -> &Refs {
        &self.state.refs
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        &mut self.state.refs
    }

    pub fn index(&self) -> &Index {
        &self.state.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.state.index
    }

    pub fn commit_ids(&self) -> &BTreeSet<ObjectId> {
        &self.state.commit_ids
    }

    /// Remember a commit for `global-log`, `find` and id prefix lookups
    pub fn record_commit(&mut self, commit: &Commit) {
        self.state.commit_ids.insert(commit.oid().clone());
    }

    /// Head commit of the current branch
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.commits.load(self.refs().head()?)
    }

    /// Working files that are neither tracked by the head commit nor staged
    pub fn untracked_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let head = self.head_commit()?;

        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|path| !head.tracks(path) && !self.index().is_staged(path))
            .collect())
    }
}
