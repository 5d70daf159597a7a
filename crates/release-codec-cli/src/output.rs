use std::io::Write;

use clap::ValueEnum;
use release_codec::Release;

use crate::exit::{CliResult, io_error, json_error};

/// What to print for a decoded release.
#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Whole record as pretty-printed JSON.
    Json,
    /// Whole record as a single JSON line.
    Compact,
    /// Only the rendered manifest.
    Manifest,
}

pub fn print_release(
    out: &mut impl Write,
    release: &Release,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, release)
                .map_err(|e| json_error("write release", e))?;
            writeln!(out).map_err(|e| io_error("write release", e))
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut *out, release).map_err(|e| json_error("write release", e))?;
            writeln!(out).map_err(|e| io_error("write release", e))
        }
        OutputFormat::Manifest => {
            write!(out, "{}", release.manifest).map_err(|e| io_error("write manifest", e))
        }
    }
}

pub fn parse_release(input: &str) -> CliResult<Release> {
    serde_json::from_str(input).map_err(|e| json_error("parse release", e))
}
