//! pipeline::traits
//!
//! The CI pipeline trait.
//!
//! # Design
//!
//! The tool never talks to a CI platform directly. Inputs are read,
//! outputs reported and failures signalled through `Pipeline`, so the
//! orchestrator can be driven by GitHub Actions, a terminal, or a test.
//!
//! # Example
//!
//! ```
//! use headerbump::pipeline::{MemoryPipeline, Pipeline};
//!
//! let pipeline = MemoryPipeline::new().with_input("indexFile", "demo.php");
//! assert_eq!(pipeline.input("indexFile").unwrap().as_deref(), Some("demo.php"));
//!
//! pipeline.set_output("version", "1.0.1").unwrap();
//! assert_eq!(pipeline.output("version").as_deref(), Some("1.0.1"));
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors from pipeline plumbing.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The output file named by the platform could not be written.
    #[error("failed to write pipeline output file '{path}': {source}")]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing to the process streams failed.
    #[error("failed to write pipeline output: {0}")]
    Stream(#[from] std::io::Error),

    /// An output name or value cannot be expressed on this platform.
    #[error("invalid pipeline output '{name}': {reason}")]
    InvalidOutput { name: String, reason: String },
}

/// A CI pipeline the tool reports to.
pub trait Pipeline {
    /// Read a named input.
    ///
    /// Returns `Ok(None)` when the input is absent or blank. Values are
    /// trimmed.
    fn input(&self, name: &str) -> Result<Option<String>, PipelineError>;

    /// Report a named output value.
    fn set_output(&self, name: &str, value: &str) -> Result<(), PipelineError>;

    /// Mark the run as failed with a message.
    fn set_failed(&self, message: &str) -> Result<(), PipelineError>;
}

/// Normalize a raw input value: trimmed, `None` when blank.
pub(crate) fn clean_input(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_trims_and_drops_blank() {
        assert_eq!(clean_input(Some("  a.php ".into())), Some("a.php".into()));
        assert_eq!(clean_input(Some("   ".into())), None);
        assert_eq!(clean_input(None), None);
    }

    #[test]
    fn error_display_formatting() {
        let err = PipelineError::InvalidOutput {
            name: "version".into(),
            reason: "contains a newline".into(),
        };
        assert!(err.to_string().contains("version"));
        assert!(err.to_string().contains("newline"));

        let err = PipelineError::OutputFile {
            path: PathBuf::from("/tmp/out"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/out"));
    }
}
