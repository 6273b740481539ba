//! cli
//!
//! Command-line interface layer for headerbump.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the [`crate::engine`], which owns every file write.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::engine;
use crate::ui::logging;
use anyhow::Result;
use thiserror::Error;

/// A failure that has already been reported through the pipeline.
///
/// The binary exits non-zero without printing it a second time.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Reported(pub String);

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command_or_default(), &ctx)
}
