use crate::areas::repository::Repository;
use crate::errors::GitletError;
use std::io::Write;

impl Repository {
    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let found = self.commits().find_by_message(self.commit_ids(), message)?;

        if found.is_empty() {
            return Err(GitletError::NoCommitWithMessage.into());
        }

        for commit_oid in found {
            writeln!(self.writer(), "{commit_oid}")?;
        }

        Ok(())
    }
}
