//! Data structures and algorithms
//!
//! - `branch`: Branch names and commit id prefixes
//! - `checkout`: Planning the working directory change of checkout and reset
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `merge`: Split point discovery, three-way reconciliation and conflict files
//! - `objects`: Object types (blob, commit) and their identities
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod merge;
pub mod objects;
pub mod status;
