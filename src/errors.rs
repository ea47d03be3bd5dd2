//! User-facing failure conditions
//!
//! Every condition a command can refuse with maps to exactly one variant, and the
//! variant's `Display` is the single line printed to the user. Internal failures
//! (I/O, corrupt state) travel as plain `anyhow::Error`s and are not listed here.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GitletError {
    // uninitialized repository
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    // precondition violations
    #[error("File does not exist.")]
    FileDoesNotExist(PathBuf),
    #[error("File name cannot be tracked.")]
    UntrackableFileName(PathBuf),
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No reason to remove the file.")]
    NoReasonToRemove(PathBuf),
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,
    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),

    // reference errors
    #[error("No commit with that id exists.")]
    NoSuchCommit(String),
    #[error("Commit id {0} is ambiguous.")]
    AmbiguousCommitId(String),
    #[error("No such branch exists.")]
    NoSuchBranch(String),
    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch(String),
    #[error("A branch with that name already exists.")]
    BranchAlreadyExists(String),
    #[error("A branch with that name does not exist.")]
    BranchNotFound(String),
    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),
    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch(String),
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay(Vec<PathBuf>),

    // merge specific
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("Cannot merge a branch with itself.")]
    SelfMerge,
    #[error("Given branch is an ancestor of the current branch.")]
    GivenBranchIsAncestor,
}

/// Find the user-facing condition carried by an error, if there is one.
pub fn as_gitlet_error(error: &anyhow::Error) -> Option<&GitletError> {
    error.downcast_ref::<GitletError>()
}
