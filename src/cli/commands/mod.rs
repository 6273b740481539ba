//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and picks the pipeline
//! 2. Calls the engine
//! 3. Formats and displays output
//!
//! Handlers do NOT write files directly.

mod bump;
mod completion;
mod show;

pub use bump::{bump, bump_with};
pub use completion::completion;
pub use show::show;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Bump {
            index_file,
            metadata_file,
            dry_run,
        } => bump::bump(ctx, index_file, metadata_file, dry_run),
        Command::Show { index_file, header } => show::show(ctx, index_file, header),
        Command::Completion { shell } => completion::completion(shell),
    }
}
