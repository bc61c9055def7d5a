//! Core logic of the `base64` command-line tool.
//!
//! The binary reads all of stdin, runs it through [`run`] and writes the
//! result to stdout. Argument handling lives here so it can be tested
//! without spawning a process.

use thiserror::Error;
use tracing::debug;

use crate::{decode, encode, Base64Error};

pub const USAGE: &str = "\
Usage: base64 [-d|--decode] [-h|--help]

Encodes stdin to base64 on stdout, or decodes with -d.
Whitespace in decode input is ignored.
";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encode,
    Decode,
    Help,
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Mode, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mode = Mode::Encode;
    for arg in args {
        match arg.as_ref() {
            "-d" | "--decode" => mode = Mode::Decode,
            "-h" | "--help" => return Ok(Mode::Help),
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }
    Ok(mode)
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Encodes `input` and terminates the text with a newline.
pub fn encode_input(input: &[u8]) -> Result<Vec<u8>, CliError> {
    let mut out = vec![0u8; encode(input, None)?];
    encode(input, Some(&mut out[..]))?;
    out.push(b'\n');
    Ok(out)
}

/// Decodes `input` after dropping ASCII whitespace.
pub fn decode_input(input: &[u8]) -> Result<Vec<u8>, CliError> {
    let text: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if text.len() != input.len() {
        debug!(stripped = input.len() - text.len(), "dropped whitespace");
    }
    let mut out = vec![0u8; decode(&text, None)?];
    let len = decode(&text, Some(&mut out[..]))?;
    out.truncate(len);
    Ok(out)
}

/// Produces the bytes to write to stdout for `mode`.
pub fn run(mode: Mode, input: &[u8]) -> Result<Vec<u8>, CliError> {
    debug!(?mode, input_len = input.len(), "running");
    match mode {
        Mode::Encode => encode_input(input),
        Mode::Decode => decode_input(input),
        Mode::Help => Ok(USAGE.as_bytes().to_vec()),
    }
}
