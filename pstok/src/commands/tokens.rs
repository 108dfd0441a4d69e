//! Tokens command implementation.
//!
//! Prints every token of one input, in text or JSON. When the scan fails,
//! the tokens read before the failure are still printed and the error is
//! returned afterwards.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use libps_scan::Scanner;

use super::common::{open_input, OutputFormat, TokenRecord};
use crate::error::{PstokError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input file; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Prefix each token with its starting location.
    pub show_location: bool,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let (name, reader) = open_input(args.input.as_deref())?;
    tracing::debug!("scanning {}", name);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_tokens(reader, &name, &args, &mut out)
}

/// Scan `reader` and write its tokens to `out`.
pub fn dump_tokens<R: Read, W: Write>(
    reader: R,
    name: &str,
    args: &TokensArgs,
    out: &mut W,
) -> Result<()> {
    let mut scanner = Scanner::new(reader);
    let mut records = Vec::new();

    let outcome = loop {
        match scanner.read_token() {
            Ok(Some(token)) => {
                records.push(TokenRecord::new(token, scanner.token_start(), args.show_location))
            },
            Ok(None) => break Ok(()),
            Err(source) => {
                break Err(PstokError::Scan {
                    path: name.to_string(),
                    source,
                })
            },
        }
    };

    tracing::debug!("scanned {} tokens from {}", records.len(), name);

    match args.format {
        OutputFormat::Text => {
            for record in &records {
                writeln!(out, "{}", record.to_text())?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    out.flush()?;

    outcome
}
