//! Core repository components
//!
//! This module contains the persistent building blocks of a repository:
//!
//! - `database`: Content-addressable blob store
//! - `commit_graph`: Immutable commit records linked by parent ids
//! - `index`: Staging area for the next commit
//! - `refs`: Branch table and current branch
//! - `repository`: The aggregate loaded and persisted around every command
//! - `workspace`: Working directory file system operations

pub mod commit_graph;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
