use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use tracing::info;

impl Repository {
    /// Check out every file of the given commit and move the current branch to it
    pub fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let target_oid = Revision::try_parse(revision)?.resolve(self.commit_ids())?;

        self.migrate_to(&target_oid)?;
        self.refs_mut().advance_current(target_oid.clone())?;
        info!(branch = %self.refs().current_branch(), head = %target_oid, "reset branch");

        self.persist()
    }
}
