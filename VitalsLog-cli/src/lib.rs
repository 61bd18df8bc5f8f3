// VitalsLog-cli lib.rs
//
// Argument parsing and command handlers for the `vitals-log` binary.
// Handlers return JSON values so the binary only decides how to print them.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;

pub use cli::{Cli, Command};
pub use commands::{execute, CommandOutput};
pub use error::CliError;
