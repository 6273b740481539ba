//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if headerbump was started in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// headerbump - bump the version in WordPress plugin/theme headers
#[derive(Parser, Debug)]
#[command(name = "headerbump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if headerbump was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run; `bump` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The command to run, defaulting to a plain bump.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Bump {
            index_file: None,
            metadata_file: None,
            dry_run: false,
        })
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Increment the header version and write metadata
    #[command(
        name = "bump",
        long_about = "Increment the version in a file header and write metadata.\n\n\
            Reads the structured comment at the top of the index file (a PHP plugin \
            header or a CSS theme header), increments the last segment of its \
            Version line, rewrites the file, and writes the header fields to \
            metadata.json. The new version is reported as the `version` output.\n\n\
            With ./package.json as index file, the manifest's version is read and \
            incremented instead; the manifest itself is not rewritten.",
        after_help = "\
EXAMPLES:
    # Bump the theme stylesheet (./style.css)
    headerbump bump

    # Bump a plugin's main file
    headerbump bump --index-file my-plugin.php

    # Preview without writing anything
    headerbump bump --index-file my-plugin.php --dry-run

IN GITHUB ACTIONS:
    The `indexFile` input (INPUT_INDEXFILE) is used when --index-file is not
    given, and the new version is appended to $GITHUB_OUTPUT."
    )]
    Bump {
        /// File whose header carries the version
        #[arg(long, value_name = "PATH")]
        index_file: Option<String>,

        /// Where to write the metadata JSON
        #[arg(long, value_name = "PATH")]
        metadata_file: Option<String>,

        /// Show what would be done without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the current and next version without writing anything
    #[command(name = "show")]
    Show {
        /// File whose header carries the version
        #[arg(long, value_name = "PATH")]
        index_file: Option<String>,

        /// Print the bumped metadata re-encoded as a header comment
        #[arg(long)]
        header: bool,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion.
pub use clap_complete::Shell;
