use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::conflict;
use crate::artifacts::merge::reconcile::{MergeAction, reconcile};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
pub const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

impl Repository {
    pub fn merge(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.index().is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let given_branch = BranchName::try_parse(name.to_string())
            .map_err(|_| GitletError::BranchNotFound(name.to_string()))?;
        let Some(given_oid) = self.refs().get(&given_branch).cloned() else {
            return Err(GitletError::BranchNotFound(name.to_string()).into());
        };
        if self.refs().is_current_branch(&given_branch) {
            return Err(GitletError::SelfMerge.into());
        }

        let given = self.commits().load(&given_oid)?;
        let in_the_way = self
            .untracked_files()?
            .into_iter()
            .filter(|path| given.tracks(path))
            .collect::<Vec<PathBuf>>();
        if !in_the_way.is_empty() {
            return Err(GitletError::UntrackedFileInTheWay(in_the_way).into());
        }

        let current_oid = self.refs().head()?.clone();
        let split_oid = self.split_point(&current_oid, &given_oid)?;

        if split_oid == given_oid {
            return Err(GitletError::GivenBranchIsAncestor.into());
        }
        if split_oid == current_oid {
            self.migrate_to(&given_oid)?;
            self.refs_mut().advance_current(given_oid)?;
            writeln!(self.writer(), "{FAST_FORWARD_NOTICE}")?;

            return self.persist();
        }

        let conflicted = self.merge_files(&split_oid, &current_oid, &given_oid)?;

        let message = format!(
            "Merged {} into {}.",
            given_branch,
            self.refs().current_branch()
        );
        let merge_commit = self.record_staged_changes(&message, vec![current_oid, given_oid])?;
        info!(commit = %merge_commit.oid(), conflicted, "created merge commit");

        if conflicted {
            writeln!(self.writer(), "{CONFLICT_NOTICE}")?;
        }

        self.persist()
    }

    fn split_point(&self, current_oid: &ObjectId, given_oid: &ObjectId) -> anyhow::Result<ObjectId> {
        let finder =
            SplitPointFinder::new(|commit_oid| self.commits().ancestor_chain(commit_oid, true));

        finder.find(current_oid, given_oid)?.ok_or_else(|| {
            anyhow::anyhow!("Commits {current_oid} and {given_oid} share no history")
        })
    }

    /// Apply the three-way reconciliation to the working directory and staging area
    ///
    /// Returns whether any path ended in conflict.
    fn merge_files(
        &mut self,
        split_oid: &ObjectId,
        current_oid: &ObjectId,
        given_oid: &ObjectId,
    ) -> anyhow::Result<bool> {
        let split = self.commits().load(split_oid)?;
        let current = self.commits().load(current_oid)?;
        let given = self.commits().load(given_oid)?;

        let mut conflicted = false;
        for (path, file) in reconcile(split.manifest(), current.manifest(), given.manifest())? {
            debug!(path = %path.display(), classification = ?file.classification, "reconciled");

            match file.action {
                MergeAction::Keep => {}
                MergeAction::TakeGiven(blob_oid) => {
                    self.workspace()
                        .restore_file(&path, &blob_oid, self.database())?;
                    self.index_mut()
                        .stage_add(path, blob_oid, current.manifest());
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(&path)?;
                    self.index_mut().mark_removed(path);
                }
                MergeAction::Conflict {
                    current: current_blob,
                    given: given_blob,
                } => {
                    let current_content =
                        current_blob.map(|oid| self.database().get(&oid)).transpose()?;
                    let given_content =
                        given_blob.map(|oid| self.database().get(&oid)).transpose()?;

                    let content =
                        conflict::render(current_content.as_deref(), given_content.as_deref());
                    let blob_oid = self.database().put(content.clone())?;

                    self.workspace().write_file(&path, &content)?;
                    self.index_mut()
                        .stage_add(path, blob_oid, current.manifest());
                    conflicted = true;
                }
            }
        }

        Ok(conflicted)
    }
}
