//! CLI argument definitions using clap
//!
//! Commands:
//! - rowstream count <FILE> [--field NAME] [--mapping PATH] [--strict]
//! - rowstream schema <FILE> [--mapping PATH]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::aggregate::VEHICLE_MAKE;

/// rowstream - lazy, typed decoding of comma-delimited record files
#[derive(Parser, Debug)]
#[command(name = "rowstream")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Count occurrences of each value of one field
    Count {
        /// Input file; the first line is the header
        file: PathBuf,

        /// Field to count by
        #[arg(long, default_value = VEHICLE_MAKE)]
        field: String,

        /// JSON file mapping field names to int, text, or date
        #[arg(long)]
        mapping: Option<PathBuf>,

        /// Drop records whose fields did not all convert
        #[arg(long)]
        strict: bool,
    },

    /// Print the schema derived from the file's header
    Schema {
        /// Input file; the first line is the header
        file: PathBuf,

        /// JSON file mapping field names to int, text, or date
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_defaults() {
        let cli = Cli::try_parse_from(["rowstream", "count", "violations.csv"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Count {
                file: PathBuf::from("violations.csv"),
                field: VEHICLE_MAKE.to_string(),
                mapping: None,
                strict: false,
            }
        );
    }

    #[test]
    fn test_count_with_options() {
        let cli = Cli::try_parse_from([
            "rowstream",
            "count",
            "data.csv",
            "--field",
            "Plate_Type",
            "--mapping",
            "types.json",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Command::Count {
                field,
                mapping,
                strict,
                ..
            } => {
                assert_eq!(field, "Plate_Type");
                assert_eq!(mapping, Some(PathBuf::from("types.json")));
                assert!(strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["rowstream", "schema"]).is_err());
    }
}
