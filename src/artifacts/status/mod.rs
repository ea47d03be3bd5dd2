//! Working tree status inspection
//!
//! Compares the working directory with the head commit and the staging area.
//!
//! ## Components
//!
//! - `file_change`: How a working file differs from its expected content
//! - `status_info`: Status information aggregation and display

pub mod file_change;
pub mod status_info;
