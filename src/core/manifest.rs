//! core::manifest
//!
//! Read-only access to the `version` field of a JSON manifest
//! (`package.json`).
//!
//! The manifest is never rewritten. Only its version value is read so the
//! next version can be reported.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::content::{read_normalized, ContentError};

/// File name of the manifest looked up next to a target file.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Errors from reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Unreadable(#[from] ContentError),

    #[error("failed to parse manifest '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("manifest '{path}' has no version field")]
    MissingVersion { path: PathBuf },
}

/// The only manifest field this tool cares about.
#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

/// Compute the manifest path for a target file: `./<dir-of-target>/package.json`.
///
/// # Example
///
/// ```
/// use headerbump::core::manifest::companion_manifest_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     companion_manifest_path("wp-content/plugins/demo/demo.php"),
///     PathBuf::from("./wp-content/plugins/demo/package.json")
/// );
/// assert_eq!(companion_manifest_path("demo.php"), PathBuf::from("./package.json"));
/// ```
pub fn companion_manifest_path(target: &str) -> PathBuf {
    let folder = match target.rfind('/') {
        Some(idx) => &target[..idx],
        None => "",
    };
    let folder = folder.strip_prefix("./").unwrap_or(folder);

    let mut path = PathBuf::from(".");
    if !folder.is_empty() && folder != "." {
        path.push(folder);
    }
    path.push(MANIFEST_FILE_NAME);
    path
}

/// Read the `version` string of a manifest.
///
/// # Errors
///
/// - `ManifestError::Unreadable` if the file cannot be read
/// - `ManifestError::ParseError` if it is not a JSON object, or `version`
///   is not a string
/// - `ManifestError::MissingVersion` if `version` is absent or blank
pub fn read_manifest_version(path: &Path) -> Result<String, ManifestError> {
    let content = read_normalized(path)?;
    parse_manifest_version(&content, path)
}

fn parse_manifest_version(content: &str, path: &Path) -> Result<String, ManifestError> {
    let manifest: Manifest =
        serde_json::from_str(content).map_err(|e| ManifestError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    manifest
        .version
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ManifestError::MissingVersion {
            path: path.to_path_buf(),
        })
}
