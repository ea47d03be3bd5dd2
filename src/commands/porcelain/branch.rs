use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::GitletError;
use tracing::info;

impl Repository {
    /// Create a branch pointing at the current head without switching to it
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())?;

        let head_oid = self.refs_mut().create(branch.clone())?.clone();
        info!(branch = %branch, head = %head_oid, "created branch");

        self.persist()
    }

    /// Delete a branch pointer; its commits stay in the store
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())
            .map_err(|_| GitletError::BranchNotFound(name.to_string()))?;

        let head_oid = self.refs_mut().remove(&branch)?;
        info!(branch = %branch, head = %head_oid, "removed branch");

        self.persist()
    }
}
