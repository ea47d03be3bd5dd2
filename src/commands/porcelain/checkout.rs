use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::path::Path;
use tracing::{debug, info};

impl Repository {
    /// Restore one file from the head commit, or from `revision` when given
    ///
    /// The staging area is left untouched.
    pub fn checkout_file(&mut self, revision: Option<&str>, file_path: &Path) -> anyhow::Result<()> {
        let commit = match revision {
            Some(revision) => {
                let commit_oid = Revision::try_parse(revision)?.resolve(self.commit_ids())?;
                self.commits().load(&commit_oid)?
            }
            None => self.head_commit()?,
        };

        let file_path = self.workspace().normalize(file_path);
        let blob_oid = commit
            .blob_for(&file_path)
            .ok_or_else(|| GitletError::FileNotInCommit(file_path.clone()))?;

        self.workspace()
            .restore_file(&file_path, blob_oid, self.database())?;
        debug!(path = %file_path.display(), commit = %commit.oid(), "restored file");

        Ok(())
    }

    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())
            .map_err(|_| GitletError::NoSuchBranch(name.to_string()))?;
        let Some(target_oid) = self.refs().get(&branch).cloned() else {
            return Err(GitletError::NoSuchBranch(name.to_string()).into());
        };
        if self.refs().is_current_branch(&branch) {
            return Err(GitletError::AlreadyOnBranch(name.to_string()).into());
        }

        self.migrate_to(&target_oid)?;
        self.refs_mut().set_current(&branch)?;
        info!(branch = %branch, "switched branch");

        self.persist()
    }

    /// Replace the working files tracked by the head commit with those of `target_oid`
    ///
    /// Refuses before touching anything when an untracked file would be
    /// overwritten. Clears the staging area on success.
    pub(crate) fn migrate_to(&mut self, target_oid: &ObjectId) -> anyhow::Result<()> {
        let head = self.head_commit()?;
        let target = self.commits().load(target_oid)?;

        let migration = Migration::new(head.manifest(), target.manifest());
        migration.check_untracked(&self.untracked_files()?)?;

        self.workspace()
            .apply_migration(&migration, self.database())?;
        self.index_mut().clear();

        Ok(())
    }
}
