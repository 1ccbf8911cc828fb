//! CLI command implementations
//!
//! Commands only open the input, run the pipeline, and print one JSON
//! response. All decoding behavior lives in the library modules.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::aggregate::count_by_field;
use crate::decoder::DecodeMode;
use crate::observability::LogSink;
use crate::reader::RecordReader;
use crate::schema::TypeMapping;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::write_response;

/// Parse arguments and run the selected command against stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command, &mut io::stdout())
}

/// Run the appropriate command based on CLI args
pub fn run_command<W: Write>(cmd: Command, out: &mut W) -> CliResult<()> {
    match cmd {
        Command::Count {
            file,
            field,
            mapping,
            strict,
        } => {
            let mode = if strict {
                DecodeMode::Strict
            } else {
                DecodeMode::Lenient
            };
            count(&file, &field, mapping.as_deref(), mode, out)
        }
        Command::Schema { file, mapping } => schema(&file, mapping.as_deref(), out),
    }
}

/// Mapping from `--mapping`, or the built-in parking-violations table
fn load_mapping(path: Option<&Path>) -> CliResult<TypeMapping> {
    match path {
        Some(p) => Ok(TypeMapping::load(p)?),
        None => Ok(TypeMapping::parking_violations()),
    }
}

/// Count occurrences of each value of `field`
pub fn count<W: Write>(
    file: &Path,
    field: &str,
    mapping_path: Option<&Path>,
    mode: DecodeMode,
    out: &mut W,
) -> CliResult<()> {
    let mapping = load_mapping(mapping_path)?;
    let mut reader = RecordReader::open(file, &mapping, LogSink)?.with_mode(mode);

    let counts = count_by_field(&mut reader, field, &LogSink)?;

    // Sorted keys keep the output stable across runs
    let counts: Map<String, Value> = counts
        .into_iter()
        .map(|(value, n)| (value, json!(n)))
        .collect();

    write_response(
        out,
        json!({
            "field": field,
            "counts": counts,
            "stats": reader.stats(),
        }),
    )
}

/// Print the schema derived from the header line
pub fn schema<W: Write>(file: &Path, mapping_path: Option<&Path>, out: &mut W) -> CliResult<()> {
    let mapping = load_mapping(mapping_path)?;
    let reader = RecordReader::open(file, &mapping, LogSink)?;

    write_response(out, json!({ "fields": reader.schema().fields() }))
}
