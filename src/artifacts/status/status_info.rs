use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use colored::Colorize;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;

// Terminology:
// - staged files: paths staged for addition
// - removed files: paths staged for removal
// - modifications: tracked or staged files whose working copy no longer matches
// - untracked files: working files neither staged nor tracked, or recreated after `rm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: BranchName,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let index = self.repository.index();
        let head = self.repository.head_commit()?;
        let workspace_files = self.repository.workspace().list_files()?;

        let mut workspace_changeset = ChangeSet::new();
        for (path, head_oid) in head.manifest() {
            if index.is_staged(path) || index.is_removed(path) {
                continue;
            }

            if let Some(change) = self.check_against_workspace(path, head_oid, &workspace_files)? {
                workspace_changeset.insert(path.clone(), change);
            }
        }
        for (path, staged_oid) in index.additions() {
            if let Some(change) = self.check_against_workspace(path, staged_oid, &workspace_files)?
            {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        let untracked_files = workspace_files
            .iter()
            .filter(|path| {
                index.is_removed(path) || (!head.tracks(path) && !index.is_staged(path))
            })
            .cloned()
            .collect();

        Ok(StatusInfo {
            branches: refs.list().map(|(name, _)| name.clone()).collect(),
            current_branch: refs.current_branch().clone(),
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().clone(),
            workspace_changeset,
            untracked_files,
        })
    }

    fn check_against_workspace(
        &self,
        path: &Path,
        expected_oid: &ObjectId,
        workspace_files: &FileSet,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        if !workspace_files.contains(path) {
            return Ok(Some(WorkspaceChangeType::Deleted));
        }

        let content = self.repository.workspace().read_file(path)?;
        if &ObjectId::hash_of(&content) != expected_oid {
            return Ok(Some(WorkspaceChangeType::Modified));
        }

        Ok(None)
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            if branch == &self.current_branch {
                writeln!(f, "{}", format!("*{branch}").green())?;
            } else {
                writeln!(f, "{branch}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged_files {
            writeln!(f, "{}", path.display().to_string().green())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed_files {
            writeln!(f, "{}", path.display().to_string().red())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.workspace_changeset {
            writeln!(f, "{} {}", path.display(), change)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)
    }
}
