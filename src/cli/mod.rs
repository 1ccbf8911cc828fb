//! CLI module for rowstream
//!
//! Provides command-line interface for:
//! - count: count occurrences of a field's values
//! - schema: print the schema derived from a file's header

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{count, run, run_command, schema};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
