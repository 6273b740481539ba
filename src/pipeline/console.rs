//! pipeline::console
//!
//! Pipeline for local runs outside CI.
//!
//! Inputs come from `HEADERBUMP_<NAME>` environment variables, outputs are
//! printed to stdout as `name=value`, failures go to stderr.

use std::io::Write;

use super::traits::{clean_input, Pipeline, PipelineError};

/// Terminal implementation of [`Pipeline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePipeline;

impl ConsolePipeline {
    /// Create a console pipeline.
    pub fn new() -> Self {
        Self
    }

    /// The environment variable an input is read from.
    pub fn input_env_name(name: &str) -> String {
        format!("HEADERBUMP_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl Pipeline for ConsolePipeline {
    fn input(&self, name: &str) -> Result<Option<String>, PipelineError> {
        Ok(clean_input(std::env::var(Self::input_env_name(name)).ok()))
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), PipelineError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}={}", name, value)?;
        Ok(())
    }

    fn set_failed(&self, message: &str) -> Result<(), PipelineError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "error: {}", message)?;
        Ok(())
    }
}
