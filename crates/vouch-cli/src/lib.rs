//! Vouch CLI library
//!
//! Components for the `vouch` command-line tool: argument parsing, command
//! dispatch, configuration, and report rendering. All trust logic lives in
//! `vouch-core`; this crate only moves bytes between files and the core.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use cli::{Cli, Commands};
pub use commands::CommandDispatcher;
pub use config::CliConfig;
pub use error::{CliError, Result};
