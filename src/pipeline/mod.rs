//! pipeline
//!
//! Abstraction over the CI platform the tool runs in.
//!
//! # Architecture
//!
//! All CI plumbing goes through the [`Pipeline`] trait, which has
//! multiple implementations:
//!
//! - [`GithubActions`]: `INPUT_*` variables, `$GITHUB_OUTPUT`, workflow commands
//! - [`ConsolePipeline`]: local terminal runs
//! - [`MemoryPipeline`]: deterministic tests
//!
//! Use [`detect`] to pick the implementation for the current environment.

mod console;
mod github;
mod memory;
mod traits;

pub use console::ConsolePipeline;
pub use github::{GithubActions, GITHUB_OUTPUT_ENV};
pub use memory::MemoryPipeline;
pub use traits::{Pipeline, PipelineError};

/// Name of the input carrying the index file path.
pub const INDEX_FILE_INPUT: &str = "indexFile";

/// Name of the output carrying the new version.
pub const VERSION_OUTPUT: &str = "version";

/// Whether the process runs inside GitHub Actions.
pub fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Pick the pipeline for the current environment.
///
/// Returns [`GithubActions`] when `GITHUB_ACTIONS=true`, otherwise a
/// [`ConsolePipeline`].
pub fn detect() -> Box<dyn Pipeline> {
    if in_github_actions() {
        Box::new(GithubActions::from_env())
    } else {
        Box::new(ConsolePipeline::new())
    }
}
