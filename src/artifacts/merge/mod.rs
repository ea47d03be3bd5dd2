//! Merge engine
//!
//! Merging the given branch into the current one:
//!
//! 1. `split_point`: find the base commit from the two first-parent chains
//! 2. `reconcile`: classify every path of the three manifests and pick an action
//! 3. `conflict`: render the file written for paths both sides changed differently
//!
//! Preconditions, fast paths and the merge commit itself live with the `merge`
//! command.

pub mod conflict;
pub mod reconcile;
pub mod split_point;
