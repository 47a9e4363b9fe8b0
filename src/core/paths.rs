//! core::paths
//!
//! Centralized path routing for files kept in a state directory.
//!
//! # Storage Layout
//!
//! - `state.json` - Persisted environment state
//! - `.state.lock` - Exclusive lock held while writing state
//!
//! # Example
//!
//! ```
//! use standup::core::paths::StatePaths;
//! use std::path::PathBuf;
//!
//! let paths = StatePaths::new("/envs/prod");
//! assert_eq!(paths.state_path(), PathBuf::from("/envs/prod/state.json"));
//! ```

use std::path::{Path, PathBuf};

/// File name of the persisted state document.
pub const STATE_FILE: &str = "state.json";

/// File name of the write lock.
pub const LOCK_FILE: &str = ".state.lock";

/// Paths inside a single state directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    state_dir: PathBuf,
}

impl StatePaths {
    /// Create paths rooted at `state_dir`.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// The state directory itself.
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// `<state_dir>/state.json`
    pub fn state_path(&self) -> PathBuf {
        self.state_dir.join(STATE_FILE)
    }

    /// `<state_dir>/.state.lock`
    pub fn lock_path(&self) -> PathBuf {
        self.state_dir.join(LOCK_FILE)
    }

    /// Temp file used for atomic state writes.
    pub fn state_temp_path(&self) -> PathBuf {
        self.state_dir.join(format!("{}.tmp", STATE_FILE))
    }
}
