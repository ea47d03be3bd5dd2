//! Three-way file reconciliation
//!
//! Every path tracked by the split point, the current head or the given head is
//! classified once by comparing the three blob ids, and each classification maps to
//! exactly one action on the merge result.
//!
//! | split | current | given | classification |
//! |-------|---------|-------|----------------|
//! | s | s | s | unchanged |
//! | s | s | g | given-only change |
//! | s | s | - | deleted by given only |
//! | s | c | s | current-only change |
//! | s | - | s | current-only change |
//! | s | x | x | both changed the same way |
//! | s | - | - | deleted by both |
//! | s | c | g | both changed differently (conflict) |
//! | - | - | g | added by given |
//! | - | c | - | current-only change |
//! | - | x | x | both changed the same way |
//! | - | c | g | both changed differently (conflict) |

use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClassification {
    Unchanged,
    CurrentOnlyChange,
    GivenOnlyChange,
    BothChangedSame,
    BothChangedDifferent,
    AddedByGiven,
    DeletedByBoth,
    DeletedByGivenOnly,
}

/// What the merge does with one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Leave the current version (or its absence) as it is
    Keep,
    /// Check out and stage the given branch's version
    TakeGiven(ObjectId),
    /// Untrack the path and delete it from the working directory
    Remove,
    /// Write and stage a file framing both versions with conflict markers
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

impl FileClassification {
    pub fn classify(
        split: Option<&ObjectId>,
        current: Option<&ObjectId>,
        given: Option<&ObjectId>,
    ) -> Self {
        match split {
            Some(_) => {
                let current_changed = current != split;
                let given_changed = given != split;

                match (current_changed, given_changed) {
                    (false, false) => FileClassification::Unchanged,
                    (false, true) if given.is_none() => FileClassification::DeletedByGivenOnly,
                    (false, true) => FileClassification::GivenOnlyChange,
                    (true, false) => FileClassification::CurrentOnlyChange,
                    (true, true) if current == given && current.is_none() => {
                        FileClassification::DeletedByBoth
                    }
                    (true, true) if current == given => FileClassification::BothChangedSame,
                    (true, true) => FileClassification::BothChangedDifferent,
                }
            }
            None => match (current, given) {
                (None, Some(_)) => FileClassification::AddedByGiven,
                (Some(_), None) => FileClassification::CurrentOnlyChange,
                (Some(current), Some(given)) if current == given => {
                    FileClassification::BothChangedSame
                }
                (Some(_), Some(_)) => FileClassification::BothChangedDifferent,
                (None, None) => FileClassification::DeletedByBoth,
            },
        }
    }

    pub fn action(
        self,
        current: Option<&ObjectId>,
        given: Option<&ObjectId>,
    ) -> anyhow::Result<MergeAction> {
        Ok(match self {
            FileClassification::Unchanged
            | FileClassification::CurrentOnlyChange
            | FileClassification::BothChangedSame
            | FileClassification::DeletedByBoth => MergeAction::Keep,
            FileClassification::GivenOnlyChange | FileClassification::AddedByGiven => {
                let given = given
                    .ok_or_else(|| anyhow::anyhow!("{self:?} without a given version"))?;
                MergeAction::TakeGiven(given.clone())
            }
            FileClassification::DeletedByGivenOnly => MergeAction::Remove,
            FileClassification::BothChangedDifferent => MergeAction::Conflict {
                current: current.cloned(),
                given: given.cloned(),
            },
        })
    }

    pub fn is_conflict(self) -> bool {
        self == FileClassification::BothChangedDifferent
    }
}

/// One reconciled path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMerge {
    pub classification: FileClassification,
    pub action: MergeAction,
}

/// Classify every path of the three manifests, sorted by path
pub fn reconcile(
    split: &Manifest,
    current: &Manifest,
    given: &Manifest,
) -> anyhow::Result<BTreeMap<PathBuf, FileMerge>> {
    let paths = split
        .keys()
        .chain(current.keys())
        .chain(given.keys())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .map(|path| {
            let (current_oid, given_oid) = (current.get(path), given.get(path));
            let classification =
                FileClassification::classify(split.get(path), current_oid, given_oid);
            let action = classification.action(current_oid, given_oid)?;

            Ok((
                path.clone(),
                FileMerge {
                    classification,
                    action,
                },
            ))
        })
        .collect()
}
