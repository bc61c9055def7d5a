//! `base64` — encode stdin to base64 on stdout, or decode with `-d`.
//!
//! Usage:
//!   base64 [-d|--decode]
//!
//! Set `RUST_LOG=debug` to trace what the tool does on stderr.

use base64_codec::cli::{parse_args, run, CliError, Mode, USAGE};
use std::io::{self, Read, Write};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main_inner() -> Result<(), CliError> {
    let mode = parse_args(std::env::args().skip(1))?;
    if mode == Mode::Help {
        print!("{USAGE}");
        return Ok(());
    }

    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;

    let out = run(mode, &buf)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = main_inner() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
