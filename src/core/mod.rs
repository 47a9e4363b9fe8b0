//! core
//!
//! Core domain types and storage for standup.
//!
//! # Modules
//!
//! - [`state`] - Persisted environment state and its store
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing inside a state directory

pub mod config;
pub mod paths;
pub mod state;
