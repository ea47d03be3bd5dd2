//! Command implementations
//!
//! Every command is an `impl Repository` block in `porcelain`, one file per command
//! (related commands such as `log` and `global-log` share a file).

pub mod porcelain;
