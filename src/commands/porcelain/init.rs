use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::repository::{GITLET_DIR, Repository, RepositoryState};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::errors::GitletError;
use anyhow::Context;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Create a repository in `path` holding only the root commit on `master`
    pub fn init(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if path.join(GITLET_DIR).exists() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        let root_oid = Commit::root().oid().clone();
        let state = RepositoryState {
            refs: Refs::new(BranchName::default(), root_oid.clone()),
            index: Index::default(),
            commit_ids: BTreeSet::from([root_oid]),
        };
        let repository = Repository::new(path, writer, state);

        fs::create_dir_all(repository.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;
        fs::create_dir_all(repository.commits().commits_path())
            .context("Failed to create .gitlet/commits directory")?;

        let root = repository.commits().create_root()?;
        repository.persist()?;

        info!(
            path = %path.display(),
            root = %root.oid(),
            "initialized empty repository"
        );

        Ok(repository)
    }
}
