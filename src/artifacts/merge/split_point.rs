//! Split point discovery
//!
//! The split point is the commit a merge uses as its base. Both heads are walked
//! along first parents only, producing two linear chains; the split point is the
//! first commit of the given branch's chain that also appears in the current
//! branch's chain.
//!
//! ## Limitation
//!
//! Second parents of earlier merge commits are never inspected. When the history
//! between the two heads itself contains merges, the commit found can be older
//! than the true lowest common ancestor:
//!
//! ```text
//!   root <- a <- m        m merged b into a; walking m's first parents
//!     \        /          gives [m, a, root], so merging b again picks
//!      `-- b -'           root instead of b
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitPointFinder::new(|commit_id| {
//!     repository.commits().ancestor_chain(commit_id, true)
//! });
//!
//! let split_point = finder.find(&current_head, &given_head)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;
use tracing::debug;

/// Finds the split point of two commits from their first-parent chains
///
/// # Type Parameters
///
/// * `ChainLoaderFn` - Returns the first-parent chain of a commit, the commit first
pub struct SplitPointFinder<ChainLoaderFn>
where
    ChainLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    chain_loader: ChainLoaderFn,
}

impl<ChainLoaderFn> SplitPointFinder<ChainLoaderFn>
where
    ChainLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(chain_loader: ChainLoaderFn) -> Self {
        Self { chain_loader }
    }

    /// Split point of `current_head` and `given_head`
    ///
    /// Returns `None` only for unrelated histories, which a single repository never
    /// produces since every commit descends from the same root.
    pub fn find(
        &self,
        current_head: &ObjectId,
        given_head: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let current_chain = (self.chain_loader)(current_head)?
            .into_iter()
            .collect::<HashSet<_>>();

        let split_point = (self.chain_loader)(given_head)?
            .into_iter()
            .find(|commit_id| current_chain.contains(commit_id));

        if let Some(commit_id) = &split_point {
            debug!(
                current = %current_head,
                given = %given_head,
                split_point = %commit_id,
                "found split point"
            );
        }

        Ok(split_point)
    }
}
