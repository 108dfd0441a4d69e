//! pstok - dump and check the token stream of PostScript programs.
//!
//! This is the main entry point for the pstok CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{PstokError, Result};

/// pstok - inspect the tokens of a PostScript program
#[derive(Parser, Debug)]
#[command(name = "pstok")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump and check the token stream of PostScript programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PSTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PSTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PSTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pstok CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a program
    ///
    /// Reads FILE, or standard input when FILE is `-` or missing, and
    /// prints one token per line.
    Tokens(TokensCommand),

    /// Check that programs scan cleanly
    ///
    /// Scans each FILE to the end and reports the first error in each.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with the line:column where it starts
    #[arg(short = 'l', long)]
    show_location: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (default: standard input)
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging, load configuration, and run the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so it never mixes with token output.
/// `RUST_LOG` takes precedence over `--verbose` when set.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PstokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
        }),
    }
}

/// Execute the tokens command, letting flags override the configuration.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    run_tokens(TokensArgs {
        input: args.input,
        format: args.format.unwrap_or(config.format),
        show_location: args.show_location || config.show_location,
    })
}
