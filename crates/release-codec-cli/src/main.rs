mod exit;
mod logging;
mod output;

use std::io::{BufRead, Write};

use clap::Parser;
use release_codec::limits::BEST_COMPRESSION;
use release_codec::{EncodeOptions, ReleaseCodec, ReleaseSchema};

use crate::exit::{
    CliError, CliResult, DATA_INVALID, SUCCESS, USAGE, decode_error, encode_error, io_error,
};
use crate::logging::LogArgs;
use crate::output::{OutputFormat, parse_release, print_release};

#[derive(Parser, Debug)]
#[command(
    name = "release-codec",
    version,
    about = "Decode a persisted release read from stdin, or encode one with -e"
)]
struct Cli {
    /// Encode the JSON release on stdin back to persisted text.
    #[arg(short = 'e', long)]
    encode: bool,

    /// Print only the manifest of the decoded release.
    #[arg(long, conflicts_with_all = ["encode", "format"])]
    manifest: bool,

    /// Output format for decoded releases.
    #[arg(long, value_name = "FORMAT", default_value = "json", conflicts_with = "encode")]
    format: OutputFormat,

    /// Gzip level used when encoding.
    #[arg(
        long,
        default_value_t = BEST_COMPRESSION,
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    level: u32,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli = Cli::parse();
    cli.log.init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result =
        read_line(&mut stdin.lock()).and_then(|line| run(&cli, &line, &mut stdout.lock()));

    match result {
        Ok(()) => std::process::exit(SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

/// Reads the single input line, without surrounding whitespace.
///
/// Bytes that are not UTF-8 can never be persisted text, so they are
/// reported as invalid data rather than an I/O failure.
fn read_line(input: &mut impl BufRead) -> CliResult<String> {
    let mut raw = Vec::new();
    input
        .read_until(b'\n', &mut raw)
        .map_err(|e| io_error("read stdin", e))?;
    let line = String::from_utf8(raw)
        .map_err(|e| CliError::new(DATA_INVALID, format!("read stdin: {e}")))?;
    let line = line.trim();
    if line.is_empty() {
        return Err(CliError::new(USAGE, "no input on stdin"));
    }
    Ok(line.to_string())
}

fn run(cli: &Cli, line: &str, out: &mut impl Write) -> CliResult<()> {
    let codec = ReleaseCodec::new(ReleaseSchema::new())
        .with_options(EncodeOptions::new().with_level(cli.level));

    if cli.encode {
        let release = parse_release(line)?;
        tracing::debug!(name = %release.name, version = release.version, "encoding release");
        let text = codec
            .encode(&release)
            .map_err(|e| encode_error("encode release", e))?;
        tracing::debug!(bytes = text.len(), level = cli.level, "encoded release");
        writeln!(out, "{text}").map_err(|e| io_error("write output", e))
    } else {
        tracing::debug!(bytes = line.len(), "decoding release");
        let (release, wire_format) = codec
            .decode_detailed(line)
            .map_err(|e| decode_error("decode release", e))?;
        tracing::debug!(
            ?wire_format,
            name = %release.name,
            version = release.version,
            status = release.status_code().as_str_name(),
            "decoded release"
        );
        let format = if cli.manifest {
            OutputFormat::Manifest
        } else {
            cli.format
        };
        print_release(out, &release, format)
    }
}
