//! rowstream CLI entry point
//!
//! Parses arguments, runs one command, and exits non-zero on failure.
//! All logic is delegated to the CLI module.

use std::io;

use rowstream::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(&mut io::stdout(), e.code().code(), e.message());
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
