use crate::areas::index::AddOutcome;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::GitletError;
use std::path::Path;
use tracing::debug;

impl Repository {
    pub fn add(&mut self, file_path: &Path) -> anyhow::Result<()> {
        let file_path = self.workspace().normalize(file_path);

        if !self.workspace().file_exists(&file_path) {
            return Err(GitletError::FileDoesNotExist(file_path).into());
        }
        if !Workspace::is_trackable_name(&file_path) {
            return Err(GitletError::UntrackableFileName(file_path).into());
        }

        let content = self.workspace().read_file(&file_path)?;
        let blob_oid = self.database().put(content)?;
        let head = self.head_commit()?;

        match self
            .index_mut()
            .stage_add(file_path.clone(), blob_oid, head.manifest())
        {
            AddOutcome::Staged => debug!(path = %file_path.display(), "staged file"),
            AddOutcome::Unchanged => {
                debug!(path = %file_path.display(), "file matches head, nothing staged")
            }
        }

        self.persist()
    }
}
