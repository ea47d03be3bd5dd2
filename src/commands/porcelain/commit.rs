use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.trim().is_empty() {
            return Err(GitletError::EmptyCommitMessage.into());
        }
        if self.index().is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        let parent = self.refs().head()?.clone();
        self.record_staged_changes(message, vec![parent])?;

        self.persist()
    }

    /// Commit the staging area on top of `parents` and advance the current branch
    pub(crate) fn record_staged_changes(
        &mut self,
        message: &str,
        parents: Vec<ObjectId>,
    ) -> anyhow::Result<Commit> {
        let commit = self.commits().create(
            message,
            self.index(),
            parents,
            Commit::timestamp_from_env(),
        )?;

        self.record_commit(&commit);
        self.refs_mut().advance_current(commit.oid().clone())?;
        self.index_mut().clear();

        Ok(commit)
    }
}
