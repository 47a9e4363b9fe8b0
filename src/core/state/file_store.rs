//! core::state::file_store
//!
//! File-based state storage.
//!
//! # Security
//!
//! - State is stored in `<state_dir>/state.json`
//! - File permissions are set to 0600 on Unix (owner read/write only)
//! - All writes are atomic (write to temp file, then rename)
//! - Writes hold an exclusive lock on `<state_dir>/.state.lock`
//! - State values are NEVER logged or included in error messages

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use fs2::FileExt;
use tracing::debug;

use super::schema::{parse_state, StateSnapshot};
use super::{StateError, StateStore};
use crate::core::paths::StatePaths;

/// State store backed by `state.json` in a state directory.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    paths: StatePaths,
}

impl FileStateStore {
    /// Create a store rooted at `state_dir`.
    ///
    /// Nothing is touched on disk until the first `load` or `save`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            paths: StatePaths::new(state_dir),
        }
    }

    /// Paths used by this store.
    pub fn paths(&self) -> &StatePaths {
        &self.paths
    }

    /// Take the exclusive write lock, failing fast if another process has it.
    ///
    /// The lock is released when the returned file is dropped.
    fn lock(&self) -> Result<File, StateError> {
        let path = self.paths.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StateError::Write(format!("cannot open {}: {}", path.display(), e)))?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(file),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Err(StateError::Locked),
            Err(e) => Err(StateError::Write(format!("cannot acquire lock: {}", e))),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<(), StateError> {
        let temp_path = self.paths.state_temp_path();

        let result = Self::write_temp(&temp_path, content).and_then(|()| {
            fs::rename(&temp_path, self.paths.state_path())
                .map_err(|e| StateError::Write(format!("cannot rename temp file: {}", e)))
        });

        if result.is_err() && temp_path.exists() {
            if let Err(e) = fs::remove_file(&temp_path) {
                debug!(path = %temp_path.display(), error = %e, "cannot remove temp file");
            }
        }
        result
    }

    fn write_temp(temp_path: &Path, content: &str) -> Result<(), StateError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .map_err(|e| StateError::Write(format!("cannot create temp file: {}", e)))?;

        // Restrict permissions before any credential hits the disk
        #[cfg(unix)]
        {
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| StateError::Write(format!("cannot set permissions: {}", e)))?;
        }

        file.write_all(content.as_bytes())
            .map_err(|e| StateError::Write(format!("cannot write state: {}", e)))?;
        file.sync_all()
            .map_err(|e| StateError::Write(format!("cannot sync to disk: {}", e)))
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<StateSnapshot, StateError> {
        let path = self.paths.state_path();
        if !path.exists() {
            debug!(path = %path.display(), "no persisted state, using empty state");
            return Ok(StateSnapshot::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StateError::Read(format!("cannot read {}: {}", path.display(), e)))?;

        let state = parse_state(&content)?;
        debug!(path = %path.display(), "loaded state");
        Ok(state)
    }

    fn save(&self, state: &StateSnapshot) -> Result<(), StateError> {
        fs::create_dir_all(self.paths.state_dir())
            .map_err(|e| StateError::Write(format!("cannot create state dir: {}", e)))?;

        let _lock = self.lock()?;

        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StateError::Write(format!("cannot serialize state: {}", e)))?;
        self.write_atomic(&content)?;

        debug!(path = %self.paths.state_path().display(), "saved state");
        Ok(())
    }
}
