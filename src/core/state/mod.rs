//! core::state
//!
//! Persisted environment state and its storage.
//!
//! # Architecture
//!
//! State is loaded once per invocation and handed to operations as an
//! immutable [`StateSnapshot`]. Operations that change state write it back
//! explicitly through a [`StateStore`]:
//!
//! - [`FileStateStore`]: `<state_dir>/state.json` (default)
//!
//! # Example
//!
//! ```no_run
//! use standup::core::state::{FileStateStore, StateStore};
//! use std::path::Path;
//!
//! let store = FileStateStore::new(Path::new("/path/to/state"));
//! let mut state = store.load()?;
//! state.key_pair.name = "keypair-1".to_string();
//! store.save(&state)?;
//! # Ok::<(), standup::core::state::StateError>(())
//! ```

mod file_store;
pub mod schema;

pub use file_store::FileStateStore;
pub use schema::{Aws, Director, KeyPair, StateSnapshot, STATE_VERSION};

use thiserror::Error;

/// Errors from state storage operations.
///
/// Messages never include state contents; the document holds credentials.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state document could not be parsed.
    #[error("failed to parse state: {0}")]
    Parse(String),

    /// The state document was written by a newer schema.
    #[error("unsupported state version {0}, supported: {STATE_VERSION}")]
    UnsupportedVersion(u32),

    /// Failed to read the state file.
    #[error("failed to read state: {0}")]
    Read(String),

    /// Failed to write the state file.
    #[error("failed to write state: {0}")]
    Write(String),

    /// Another process is writing the same state directory.
    #[error("state directory is locked by another standup process")]
    Locked,
}

/// Persistence handle for environment state.
///
/// Implementations must be thread-safe (Send + Sync) and must never log
/// or include state values in error messages.
pub trait StateStore: Send + Sync {
    /// Load the persisted state.
    ///
    /// Returns the zero-value snapshot if nothing has been persisted yet.
    fn load(&self) -> Result<StateSnapshot, StateError>;

    /// Persist `state`, replacing whatever was stored before.
    fn save(&self, state: &StateSnapshot) -> Result<(), StateError>;
}
