//! A small, single-user version-control system
//!
//! The repository lives in a `.gitlet` directory next to the files it tracks.
//! Each command opens the repository, acts on it and persists its state:
//!
//! ```rust,ignore
//! let mut repository = Repository::open(&std::env::current_dir()?, Box::new(std::io::stdout()))?;
//! repository.add(Path::new("wug.txt"))?;
//! repository.commit("add wug")?;
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
