//! core::target
//!
//! Resolution of the `indexFile` input into the file that carries the
//! version.
//!
//! # Rules
//!
//! - empty, absent, or `style.css` → [`Target::Default`] (`./style.css`)
//! - `./package.json` → [`Target::Manifest`]
//! - anything else → [`Target::Explicit`]
//!
//! Inputs are trimmed before matching.

use std::path::PathBuf;

/// Path used when no index file is supplied.
pub const DEFAULT_INDEX_FILE: &str = "./style.css";

/// Literal input that selects the default path.
pub const DEFAULT_INDEX_ALIAS: &str = "style.css";

/// Literal input that selects manifest mode.
pub const MANIFEST_INDEX_FILE: &str = "./package.json";

/// The file a run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The default theme stylesheet.
    Default,
    /// The JSON manifest; its version is read but the file is not rewritten.
    Manifest,
    /// An explicitly supplied header-bearing file.
    Explicit(String),
}

impl Target {
    /// Resolve an optional input value.
    ///
    /// # Example
    ///
    /// ```
    /// use headerbump::core::target::Target;
    ///
    /// assert_eq!(Target::resolve(None), Target::Default);
    /// assert_eq!(Target::resolve(Some("style.css")), Target::Default);
    /// assert_eq!(Target::resolve(Some("./package.json")), Target::Manifest);
    /// assert_eq!(
    ///     Target::resolve(Some("demo.php")),
    ///     Target::Explicit("demo.php".into())
    /// );
    /// ```
    pub fn resolve(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") | Some(DEFAULT_INDEX_ALIAS) => Target::Default,
            Some(MANIFEST_INDEX_FILE) => Target::Manifest,
            Some(other) => Target::Explicit(other.to_string()),
        }
    }

    /// The path as written by the user (or the default).
    pub fn as_str(&self) -> &str {
        match self {
            Target::Default => DEFAULT_INDEX_FILE,
            Target::Manifest => MANIFEST_INDEX_FILE,
            Target::Explicit(path) => path,
        }
    }

    /// The target path, relative to the working directory.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(self.as_str())
    }

    /// Whether a non-default index file was supplied.
    ///
    /// This is the value written as `is_plugin` in the metadata file.
    pub fn is_plugin(&self) -> bool {
        !matches!(self, Target::Default)
    }

    /// Whether this target is read as a JSON manifest.
    pub fn is_manifest(&self) -> bool {
        matches!(self, Target::Manifest)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
