//! pipeline::github
//!
//! GitHub Actions pipeline.
//!
//! # Protocol
//!
//! - Inputs come from `INPUT_<NAME>` environment variables, where the name
//!   is uppercased and spaces become underscores.
//! - Outputs are appended as `name=value` lines to the file named by
//!   `$GITHUB_OUTPUT`. When that variable is unset the legacy
//!   `::set-output` workflow command is printed instead.
//! - Failures are printed as an `::error::` workflow command; the process
//!   exit code is handled by the binary.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use super::traits::{clean_input, Pipeline, PipelineError};

/// Environment variable naming the step output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// GitHub Actions implementation of [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct GithubActions {
    output_file: Option<PathBuf>,
}

impl GithubActions {
    /// Create a pipeline from the current environment.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { output_file }
    }

    /// Create a pipeline that appends outputs to a specific file.
    ///
    /// This is primarily useful for testing.
    pub fn with_output_file(path: PathBuf) -> Self {
        Self {
            output_file: Some(path),
        }
    }

    /// The environment variable an input is read from.
    ///
    /// ```
    /// use headerbump::pipeline::GithubActions;
    ///
    /// assert_eq!(GithubActions::input_env_name("indexFile"), "INPUT_INDEXFILE");
    /// assert_eq!(GithubActions::input_env_name("index file"), "INPUT_INDEX_FILE");
    /// ```
    pub fn input_env_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

/// Escape a workflow command message (`%`, CR and LF).
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

impl Pipeline for GithubActions {
    fn input(&self, name: &str) -> Result<Option<String>, PipelineError> {
        Ok(clean_input(std::env::var(Self::input_env_name(name)).ok()))
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), PipelineError> {
        if value.contains('\n') || value.contains('\r') {
            return Err(PipelineError::InvalidOutput {
                name: name.to_string(),
                reason: "value contains a line break".into(),
            });
        }

        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| PipelineError::OutputFile {
                        path: path.clone(),
                        source: e,
                    })?;
                writeln!(file, "{}={}", name, value).map_err(|e| PipelineError::OutputFile {
                    path: path.clone(),
                    source: e,
                })?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(
                    stdout,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
            }
        }
        Ok(())
    }

    fn set_failed(&self, message: &str) -> Result<(), PipelineError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "::error::{}", escape_data(message))?;
        Ok(())
    }
}
