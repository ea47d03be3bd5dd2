use crate::areas::database::Database;
use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".gitlet", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Turn a user-supplied path into a path relative to the workspace root
    pub fn normalize(&self, file_path: &Path) -> PathBuf {
        let relative = file_path
            .strip_prefix(self.path.as_ref())
            .unwrap_or(file_path);

        relative
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect()
    }

    /// Whether a normalized path names a regular file inside the workspace
    pub fn file_exists(&self, file_path: &Path) -> bool {
        Self::is_inside(file_path)
            && !Self::is_ignored(file_path)
            && self.path.join(file_path).is_file()
    }

    /// Whether a path can be stored as a single commit record line
    pub fn is_trackable_name(file_path: &Path) -> bool {
        file_path
            .to_str()
            .is_some_and(|name| !name.contains(['\n', '\r']))
    }

    fn is_inside(path: &Path) -> bool {
        path.components()
            .all(|component| matches!(component, Component::Normal(_)))
    }

    /// Every regular file under the workspace root, relative to it, sorted
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        Ok(WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                entry.depth() == 0 || !IGNORED_PATHS.contains(&name.as_ref())
            })
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path()))
            .collect())
    }

    fn is_ignored(path: &Path) -> bool {
        // Check if any component of the path is in IGNORED_PATHS
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        if path.is_file() && !Self::is_ignored(relative) {
            Some(relative.to_path_buf())
        } else {
            None
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Write `content` to `file_path`, creating parent directories as needed
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directories for: {:?}", file_path)
            })?;
        }
        // a directory standing where the file goes is replaced
        if full_path.is_dir() {
            std::fs::remove_dir_all(&full_path)
                .with_context(|| format!("Failed to remove existing directory: {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete `file_path` if present, then prune directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }
        self.prune_empty_parent_dirs(&full_path)?;

        Ok(())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    /// Write the content of `blob_oid` from `database` to `file_path`
    pub fn restore_file(
        &self,
        file_path: &Path,
        blob_oid: &ObjectId,
        database: &Database,
    ) -> anyhow::Result<()> {
        let content = database.get(blob_oid)?;
        self.write_file(file_path, &content)
    }

    // Deletions go first so that a file can replace a directory emptied by the migration.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        for action in [ActionType::Delete, ActionType::Modify, ActionType::Add] {
            let planned = migration
                .actions()
                .get(&action)
                .ok_or_else(|| anyhow::anyhow!("Invalid action type"))?;

            for (file_path, blob_oid) in planned {
                match (action, blob_oid) {
                    (ActionType::Delete, None) => self.remove_file(file_path)?,
                    (ActionType::Add | ActionType::Modify, Some(blob_oid)) => {
                        self.restore_file(file_path, blob_oid, database)?
                    }
                    _ => anyhow::bail!("Invalid action and entry combination"),
                }
            }
        }

        Ok(())
    }
}
