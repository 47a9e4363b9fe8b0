//! Standup - a CLI for standing up deployment environments
//!
//! Standup routes each command-line run to exactly one registered operation,
//! answering help and version requests on the way, and keeps the environment
//! state in a `state.json` file inside the state directory.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, builds the registry)
//! - [`engine`] - Routes one invocation to one operation
//! - [`core`] - Configuration, state snapshot schema and persistence
//! - [`ui`] - Usage listings and terminal output
//!
//! # Correctness Invariants
//!
//! 1. Each run executes at most one operation
//! 2. Operations get their own copy of the state snapshot
//! 3. Operation errors reach the caller unchanged
//! 4. State files are replaced atomically under an exclusive lock

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
