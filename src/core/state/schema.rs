//! core::state::schema
//!
//! Persisted environment state (v1).
//!
//! # Schema Design
//!
//! - Self-describing with a `version` field checked before full parsing
//! - Every section defaults to its zero value, so a fresh environment is
//!   simply `StateSnapshot::default()`
//! - Unknown fields are rejected
//!
//! # Example
//!
//! ```
//! use standup::core::state::schema::{parse_state, StateSnapshot};
//!
//! let json = r#"{
//!     "version": 1,
//!     "env_id": "standup-env-lake",
//!     "director": { "address": "https://10.0.0.6:25555" }
//! }"#;
//!
//! let state = parse_state(json).unwrap();
//! assert_eq!(state.env_id, "standup-env-lake");
//! assert_eq!(state.director.address, "https://10.0.0.6:25555");
//! assert!(state.key_pair.name.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::StateError;

/// Current state schema version.
pub const STATE_VERSION: u32 = 1;

/// Immutable snapshot of previously persisted environment state.
///
/// Operations receive this by value: whatever they do to their copy never
/// reaches the caller's snapshot. Persisting a change is an explicit call
/// through a [`super::StateStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateSnapshot {
    /// Schema version of the persisted document.
    pub version: u32,

    /// Identifier of the environment this state belongs to.
    pub env_id: String,

    /// Cloud credentials.
    pub aws: Aws,

    /// Key pair used to reach the director VM.
    pub key_pair: KeyPair,

    /// Director coordinates.
    pub director: Director,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            env_id: String::new(),
            aws: Aws::default(),
            key_pair: KeyPair::default(),
            director: Director::default(),
        }
    }
}

impl StateSnapshot {
    /// True when nothing has been persisted for this environment yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// AWS credentials and region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Aws {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

/// SSH key pair registered with the cloud provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyPair {
    pub name: String,
    pub public_key: String,
    pub private_key: String,
}

/// Director name, endpoint and credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Director {
    pub name: String,
    pub address: String,
    pub username: String,
    pub password: String,
    pub ca_cert: String,
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct StateEnvelope {
    #[serde(default = "default_version")]
    version: u32,
}

fn default_version() -> u32 {
    STATE_VERSION
}

/// Parse a state document, checking its version first.
///
/// # Errors
///
/// - [`StateError::Parse`] if the JSON is malformed or has unknown fields
/// - [`StateError::UnsupportedVersion`] if written by a newer schema
pub fn parse_state(json: &str) -> Result<StateSnapshot, StateError> {
    let envelope: StateEnvelope =
        serde_json::from_str(json).map_err(|e| StateError::Parse(e.to_string()))?;

    if envelope.version > STATE_VERSION {
        return Err(StateError::UnsupportedVersion(envelope.version));
    }

    serde_json::from_str(json).map_err(|e| StateError::Parse(e.to_string()))
}
