//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! Global flags come before the command name:
//! - `--help` / `-h`: Show usage
//! - `--version` / `-v`: Show version
//! - `--state-dir <DIR>`: Directory holding `state.json`
//! - `--endpoint-override <URL>`: Override the cloud API endpoint
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//!
//! Everything from the command name on is captured verbatim, hyphenated
//! tokens included, and handed to the dispatcher.

use clap::Parser;
use std::path::PathBuf;

use crate::engine::{HELP_COMMAND, VERSION_COMMAND};

/// standup - stand up deployment environments and manage their state
#[derive(Parser, Debug)]
#[command(name = "standup")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Directory that stores state.json
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Override the cloud API endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint_override: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print usage
    #[arg(short, long)]
    pub help: bool,

    /// Print version
    #[arg(short, long)]
    pub version: bool,

    /// Command followed by its options
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Unlike `Parser::parse`, this never exits the process; rejected
    /// command lines come back as a `clap::Error` for `main` to report.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Parser::try_parse()
    }

    /// Split into the command name and its trailing tokens.
    ///
    /// - `--help` (or no command at all) routes to `help`, keeping any
    ///   command as the help target
    /// - `--version` routes to `version`
    pub fn command_line(&self) -> (String, Vec<String>) {
        if self.help {
            return (HELP_COMMAND.to_string(), self.args.clone());
        }
        if self.version {
            return (VERSION_COMMAND.to_string(), self.args.clone());
        }

        match self.args.split_first() {
            Some((name, tokens)) => (name.clone(), tokens.to_vec()),
            None => (HELP_COMMAND.to_string(), Vec::new()),
        }
    }
}
