use crate::areas::repository::Repository;
use std::path::Path;
use tracing::debug;

impl Repository {
    pub fn rm(&mut self, file_path: &Path) -> anyhow::Result<()> {
        let file_path = self.workspace().normalize(file_path);
        let head = self.head_commit()?;

        let tracked = self.index_mut().stage_remove(&file_path, head.manifest())?;
        if tracked {
            self.workspace().remove_file(&file_path)?;
            debug!(path = %file_path.display(), "staged removal");
        }

        self.persist()
    }
}
