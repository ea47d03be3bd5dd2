use colored::Colorize;

/// How a working file differs from what the next commit would record for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChangeType {
    Modified,
    Deleted,
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::Modified => "(modified)",
            WorkspaceChangeType::Deleted => "(deleted)",
        }
    }
}

impl std::fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label.red())
    }
}
