//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`usage`] - Command listing and per-command help rendering
//!
//! # Design
//!
//! All terminal output goes through this module so that quiet mode and
//! usage layout are handled in one place.

pub mod output;
pub mod usage;

pub use usage::{ConsoleUsage, UsagePrinter};
