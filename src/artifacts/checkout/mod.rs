//! Checkout planning
//!
//! Switching branches and resetting both replace the tracked tree of the working
//! directory. The migration is planned from the two manifests, checked against
//! untracked files, and only then applied by the workspace.

pub mod migration;
