//! Command-line entry point for Hortus.
//!
//! Parses arguments, loads the TOML configuration, wires the Notion client
//! into the web server, and runs the selected command. The binary is thin;
//! everything testable lives here in library modules.
//!
//! # Modules
//!
//! - [`cli`]: Argument and command definitions
//! - [`config`]: TOML configuration with path resolution
//! - [`app`]: Command dispatch and the serve wiring
//! - [`error`]: Error types and Result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;

pub use app::run;
pub use cli::{CliArgs, Command};
pub use config::HortusConfig;
pub use error::{Error, Result};
