//! engine
//!
//! Orchestrates a run: ResolveTarget -> ReadAndNormalize ->
//! ExtractAndBumpVersion -> Substitute -> PersistOutputs.
//!
//! # Architecture
//!
//! The engine sequences the pure pieces in [`crate::core`] and is the only
//! caller of the write primitive in [`crate::core::content`]. It never
//! moves back to an earlier state, and there is no rollback: if the source
//! file is written and the metadata write then fails, the source file stays
//! modified.
//!
//! # Example
//!
//! ```no_run
//! use headerbump::core::config::Config;
//! use headerbump::engine::{runner, BumpRequest, Context};
//! use headerbump::pipeline::GithubActions;
//!
//! let ctx = Context::default();
//! let pipeline = GithubActions::from_env();
//! let outcome = runner::run_bump(&ctx, &Config::default(), &BumpRequest::default(), &pipeline)?;
//! println!("bumped to {}", outcome.version);
//! # Ok::<(), headerbump::engine::RunError>(())
//! ```

pub mod runner;

pub use runner::{
    plan_bump, run_bump, BumpOutcome, BumpPlan, BumpRequest, RunError, RunState,
};

use std::path::{Path, PathBuf};

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Create a context rooted at a directory.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Default::default()
        }
    }

    /// Output verbosity for this context.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The directory relative paths are resolved against.
    pub fn root(&self) -> PathBuf {
        self.cwd.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a path as seen from the working directory.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        match &self.cwd {
            Some(cwd) => cwd.join(path),
            None => path.as_ref().to_path_buf(),
        }
    }
}
