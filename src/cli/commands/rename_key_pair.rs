//! rename-key-pair command - Record a new key pair name in state

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::core::state::{StateSnapshot, StateStore};
use crate::engine::Operation;
use crate::ui::output::{self, Verbosity};

/// Options accepted after `rename-key-pair`.
#[derive(Parser, Debug)]
#[command(name = "rename-key-pair", no_binary_name = true)]
struct RenameArgs {
    /// New name of the key pair
    #[arg(long)]
    name: String,
}

/// Renames the key pair and persists the result.
#[derive(Clone)]
pub struct RenameKeyPairCommand {
    store: Arc<dyn StateStore>,
    verbosity: Verbosity,
}

impl RenameKeyPairCommand {
    pub fn new(store: Arc<dyn StateStore>, verbosity: Verbosity) -> Self {
        Self { store, verbosity }
    }
}

impl Operation for RenameKeyPairCommand {
    fn execute(&self, tokens: &[String], mut state: StateSnapshot) -> Result<()> {
        let args = RenameArgs::try_parse_from(tokens).context("invalid rename-key-pair options")?;

        let name = args.name.trim();
        if name.is_empty() {
            anyhow::bail!("key pair name must not be empty");
        }

        let previous = std::mem::replace(&mut state.key_pair.name, name.to_string());
        self.store.save(&state)?;

        info!(from = %previous, to = %name, "renamed key pair");
        output::print(format!("Key pair renamed to '{}'", name), self.verbosity);
        Ok(())
    }

    fn usage(&self) -> String {
        "Renames the key pair recorded in state\n\n  --name  New name of the key pair".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{FileStateStore, StateError};
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<StateSnapshot>>,
    }

    impl StateStore for RecordingStore {
        fn load(&self) -> Result<StateSnapshot, StateError> {
            Ok(StateSnapshot::default())
        }

        fn save(&self, state: &StateSnapshot) -> Result<(), StateError> {
            self.saved.lock().unwrap().push(state.clone());
            Ok(())
        }
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn saves_renamed_state() {
        let store = Arc::new(RecordingStore::default());
        let cmd = RenameKeyPairCommand::new(store.clone(), Verbosity::Quiet);

        let mut state = StateSnapshot::default();
        state.key_pair.name = "old".to_string();
        state.key_pair.public_key = "ssh-rsa AAAA".to_string();

        cmd.execute(&tokens(&["--name", "some-new-keypair-name"]), state.clone())
            .unwrap();

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].key_pair.name, "some-new-keypair-name");
        assert_eq!(saved[0].key_pair.public_key, "ssh-rsa AAAA");
        assert_eq!(state.key_pair.name, "old");
    }

    #[test]
    fn missing_name_rejected() {
        let store = Arc::new(RecordingStore::default());
        let cmd = RenameKeyPairCommand::new(store.clone(), Verbosity::Quiet);

        assert!(cmd.execute(&[], StateSnapshot::default()).is_err());
        assert!(cmd
            .execute(&tokens(&["--name", "  "]), StateSnapshot::default())
            .is_err());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_option_rejected() {
        let cmd = RenameKeyPairCommand::new(Arc::new(RecordingStore::default()), Verbosity::Quiet);
        let err = cmd
            .execute(&tokens(&["--nmae", "x"]), StateSnapshot::default())
            .unwrap_err();
        assert!(err.to_string().contains("rename-key-pair"));
    }

    #[test]
    fn persists_through_file_store() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(FileStateStore::new(temp.path()));
        let cmd = RenameKeyPairCommand::new(store.clone(), Verbosity::Quiet);

        cmd.execute(&tokens(&["--name", "kp-2"]), StateSnapshot::default())
            .unwrap();
        assert_eq!(store.load().unwrap().key_pair.name, "kp-2");
    }
}
