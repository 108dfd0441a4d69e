//! Check command implementation.
//!
//! Scans each input to the end and reports whether it tokenizes cleanly.

use std::path::{Path, PathBuf};

use libps_scan::Scanner;

use super::common::open_input;
use crate::error::{PstokError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Inputs to check; empty means standard input.
    pub inputs: Vec<PathBuf>,
}

/// Run the check command.
///
/// Every input is checked even after a failure. Returns an error if any
/// input failed.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let inputs = if args.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.inputs
    };

    let mut failed = 0usize;
    for input in &inputs {
        match check_input(input) {
            Ok((name, count)) => println!("{}: ok ({} tokens)", name, count),
            Err(e) => {
                failed += 1;
                eprintln!("error: {}", e);
            },
        }
    }

    tracing::info!("checked {} inputs, {} failed", inputs.len(), failed);

    if failed > 0 {
        return Err(PstokError::CommandExecution(format!(
            "{} of {} inputs failed to scan",
            failed,
            inputs.len()
        )));
    }
    Ok(())
}

/// Scan one input to the end, returning its display name and token count.
fn check_input(path: &Path) -> Result<(String, usize)> {
    let (name, reader) = open_input(Some(path))?;
    let mut count = 0;
    for token in Scanner::new(reader) {
        token.map_err(|source| PstokError::Scan {
            path: name.clone(),
            source,
        })?;
        count += 1;
    }
    Ok((name, count))
}
