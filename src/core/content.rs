//! core::content
//!
//! Text loading, line-ending normalization, and the write primitive.
//!
//! # Design
//!
//! Every file the tool reads goes through [`read_normalized`], so the rest
//! of the pipeline only ever observes LF-terminated lines. A file rewritten
//! by the tool therefore loses any CRLF it had; this is accepted behavior.
//!
//! This is also the only module that writes to the filesystem. The
//! architecture lint in `tests/architecture_lint.rs` enforces it.
//!
//! # Example
//!
//! ```
//! use headerbump::core::content::normalize_line_endings;
//!
//! assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or writing text files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write file '{path}': {source}")]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Replace every CRLF with LF, then every remaining lone CR with LF.
///
/// Applying it twice yields the same result as applying it once.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a UTF-8 file and normalize its line endings.
///
/// # Errors
///
/// Returns `ContentError::Unreadable` if the file is missing or is not
/// valid UTF-8.
pub fn read_normalized(path: &Path) -> Result<String, ContentError> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(normalize_line_endings(&raw))
}

/// Overwrite a file with the given text.
///
/// # Errors
///
/// Returns `ContentError::Unwritable` if the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<(), ContentError> {
    fs::write(path, content).map_err(|e| ContentError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })
}
