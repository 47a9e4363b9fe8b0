//! engine::registry
//!
//! Name to operation lookup table.
//!
//! The registry is assembled once at startup and is immutable afterwards:
//! the builder is consumed by [`RegistryBuilder::build`] and [`Registry`]
//! exposes lookups only.
//!
//! # Example
//!
//! ```
//! # use anyhow::Result;
//! # use standup::core::state::StateSnapshot;
//! # use standup::engine::Operation;
//! use standup::engine::Registry;
//!
//! # struct Noop;
//! # impl Operation for Noop {
//! #     fn execute(&self, _: &[String], _: StateSnapshot) -> Result<()> { Ok(()) }
//! #     fn usage(&self) -> String { String::new() }
//! # }
//! let registry = Registry::builder()
//!     .register("some", Noop)?
//!     .build();
//!
//! assert!(registry.lookup("some").is_some());
//! assert!(registry.lookup("other").is_none());
//! # Ok::<(), standup::engine::RegistryError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::command::Operation;

/// Errors from registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Operation names must be non-empty.
    #[error("operation name must not be empty")]
    EmptyName,

    /// Each name maps to exactly one operation.
    #[error("operation '{0}' is already registered")]
    Duplicate(String),
}

/// Immutable mapping from operation name to operation.
#[derive(Clone, Default)]
pub struct Registry {
    operations: HashMap<String, Arc<dyn Operation>>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up an operation by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Operation> {
        self.operations.get(name).map(|op| op.as_ref())
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("operations", &self.names())
            .finish()
    }
}

/// Builder for [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    operations: HashMap<String, Arc<dyn Operation>>,
}

impl RegistryBuilder {
    /// Register `operation` under `name`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyName`] if `name` is empty
    /// - [`RegistryError::Duplicate`] if `name` is already taken
    pub fn register(
        self,
        name: impl Into<String>,
        operation: impl Operation + 'static,
    ) -> Result<Self, RegistryError> {
        self.register_shared(name, Arc::new(operation))
    }

    /// Register an already shared operation under `name`.
    pub fn register_shared(
        mut self,
        name: impl Into<String>,
        operation: Arc<dyn Operation>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.operations.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        self.operations.insert(name, operation);
        Ok(self)
    }

    /// Freeze the registry.
    pub fn build(self) -> Registry {
        Registry {
            operations: self.operations,
        }
    }
}
