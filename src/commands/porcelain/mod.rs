//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create a repository with its root commit
//! - `add`: Stage a file for the next commit
//! - `commit`: Record the staged changes
//! - `rm`: Unstage a file or stage its removal
//! - `log` / `global-log`: Show commit history
//! - `find`: Look up commits by message
//! - `status`: Show branches, staged changes and working tree changes
//! - `checkout`: Restore files or switch branches
//! - `branch` / `rm-branch`: Create or delete branches
//! - `reset`: Move the current branch to a commit
//! - `merge`: Merge another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
