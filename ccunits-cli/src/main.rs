//! ccunits - unit parsing and conversion over stdin/stdout
//!
//! Reads one command per line and writes one response per line:
//! - parse <unit>
//! - convert <value> <from-unit> <to-unit>
//! - prefix <value> <unit> <prefix>
//! - help, quit
//!
//! Environment:
//! - CCUNITS_LOG: log level for stderr (default warn)
//! - CCUNITS_OUTPUT: json (default) or text

mod config;
mod handler;

use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::{error, info, warn};

use config::{Config, OutputFormat};
use handler::{handle_line, RequestError, Response};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> io::Result<()> {
    let (config, warnings) = Config::from_env();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .init();

    for w in &warnings {
        warn!("{}", w);
    }
    info!(version = VERSION, output = ?config.output, "ccunits ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match handle_line(line) {
            Ok(Some(response)) => write_response(&mut out, config.output, &response)?,
            Ok(None) => break,
            Err(e) => {
                error!(request = line, "{}", e);
                write_error(&mut out, config.output, &e)?;
            }
        }
        out.flush()?;
    }

    info!("input closed");
    Ok(())
}

fn write_response(out: &mut impl Write, format: OutputFormat, response: &Response) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, response)?;
            writeln!(out)
        }
        OutputFormat::Text => writeln!(out, "{}", response),
    }
}

fn write_error(out: &mut impl Write, format: OutputFormat, e: &RequestError) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", json!({ "error": e.to_string() })),
        OutputFormat::Text => writeln!(out, "error: {}", e),
    }
}
