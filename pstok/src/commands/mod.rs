//! Command implementations for the pstok CLI.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `run_*` entry point.

pub mod check;
pub mod common;
pub mod tokens;
