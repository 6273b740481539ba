//! core::version
//!
//! Reading the `Version:` line from a header and computing the next version.
//!
//! # Increment Rule
//!
//! A version is a dot-separated list of segments. Only the last segment is
//! interpreted: it is parsed as a base-10 unsigned integer and incremented.
//! All earlier segments are passed through as opaque text.
//!
//! ```
//! use headerbump::core::version::increment_version;
//!
//! assert_eq!(increment_version("0.0.1").unwrap(), "0.0.2");
//! assert_eq!(increment_version("1.9").unwrap(), "1.10");
//! assert_eq!(increment_version("2").unwrap(), "3");
//! assert!(increment_version("1.0.beta").is_err());
//! ```

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Errors from reading or incrementing a version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("version not found in header (expected a 'Version:' line)")]
    NotFound,

    #[error("version is empty")]
    Empty,

    #[error("non-numeric version segment '{segment}' in version '{version}'")]
    NonNumeric { version: String, segment: String },

    #[error("version segment overflows when incremented: '{version}'")]
    Overflow { version: String },
}

/// A `Version:` line located inside a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    /// The captured version text, trimmed.
    pub raw: String,
    /// Byte range of the whole `Version...: value` text within the header.
    pub span: Range<usize>,
}

fn version_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Version\s?:(.*)").expect("version regex must compile"))
}

/// Find the first `Version:` line in a header.
///
/// Any later `Version:` lines are ignored.
///
/// # Errors
///
/// Returns `VersionError::NotFound` if the header has no `Version:` line.
pub fn find_version_line(header: &str) -> Result<VersionLine, VersionError> {
    let caps = version_line_regex()
        .captures(header)
        .ok_or(VersionError::NotFound)?;

    let whole = caps.get(0).ok_or(VersionError::NotFound)?;
    let raw = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();

    Ok(VersionLine {
        raw: raw.to_string(),
        span: whole.range(),
    })
}

/// Increment the last dot-separated segment of a version.
///
/// Surrounding whitespace is trimmed first.
///
/// # Errors
///
/// - `VersionError::Empty` if the version is blank
/// - `VersionError::NonNumeric` if the last segment is not a base-10 integer
/// - `VersionError::Overflow` if the increment does not fit in a `u64`
pub fn increment_version(version: &str) -> Result<String, VersionError> {
    let version = version.trim();
    if version.is_empty() {
        return Err(VersionError::Empty);
    }

    let mut segments: Vec<String> = version.split('.').map(str::to_string).collect();
    let last = segments.pop().unwrap_or_default();

    let number: u64 = last.parse().map_err(|_| VersionError::NonNumeric {
        version: version.to_string(),
        segment: last.clone(),
    })?;
    let next = number.checked_add(1).ok_or_else(|| VersionError::Overflow {
        version: version.to_string(),
    })?;

    segments.push(next.to_string());
    Ok(segments.join("."))
}

/// Result of bumping the version inside a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBump {
    /// Version found in the header.
    pub previous: String,
    /// Incremented version.
    pub next: String,
    /// Header text with its `Version:` line rewritten.
    pub text: String,
}

/// Find the header's version, increment it, and rewrite the header.
///
/// The first `Version:` line becomes `Version: <new>`; the rest of the
/// header is left byte-for-byte intact.
pub fn bump_header_version(header: &str) -> Result<HeaderBump, VersionError> {
    let line = find_version_line(header)?;
    let next = increment_version(&line.raw)?;

    let mut text = String::with_capacity(header.len() + 4);
    text.push_str(&header[..line.span.start]);
    text.push_str("Version: ");
    text.push_str(&next);
    text.push_str(&header[line.span.end..]);

    Ok(HeaderBump {
        previous: line.raw,
        next,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_last_segment() {
        assert_eq!(increment_version("0.0.1").unwrap(), "0.0.2");
        assert_eq!(increment_version("1.9").unwrap(), "1.10");
        assert_eq!(increment_version("2").unwrap(), "3");
        assert_eq!(increment_version("1.2.10").unwrap(), "1.2.11");
    }

    #[test]
    fn trims_before_incrementing() {
        assert_eq!(increment_version("  1.0.0 ").unwrap(), "1.0.1");
    }

    #[test]
    fn leading_segments_are_opaque() {
        assert_eq!(increment_version("v1-beta.x.7").unwrap(), "v1-beta.x.8");
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(increment_version("1.09").unwrap(), "1.10");
    }

    #[test]
    fn non_numeric_last_segment_fails() {
        let err = increment_version("1.0.0-rc1").unwrap_err();
        assert_eq!(
            err,
            VersionError::NonNumeric {
                version: "1.0.0-rc1".into(),
                segment: "0-rc1".into(),
            }
        );
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn trailing_dot_fails() {
        assert!(matches!(
            increment_version("1.0."),
            Err(VersionError::NonNumeric { .. })
        ));
    }

    #[test]
    fn empty_version_fails() {
        assert_eq!(increment_version("   "), Err(VersionError::Empty));
    }

    #[test]
    fn overflow_fails() {
        let max = format!("1.{}", u64::MAX);
        assert!(matches!(
            increment_version(&max),
            Err(VersionError::Overflow { .. })
        ));
    }

    #[test]
    fn finds_first_version_line() {
        let header = "/*\nVersion: 1.0.0\nVersion: 9.9.9\n*/";
        let line = find_version_line(header).unwrap();
        assert_eq!(line.raw, "1.0.0");
        assert_eq!(&header[line.span.clone()], "Version: 1.0.0");
    }

    #[test]
    fn allows_single_space_before_colon() {
        let line = find_version_line("/*\nVersion : 3.4\n*/").unwrap();
        assert_eq!(line.raw, "3.4");
    }

    #[test]
    fn missing_version_line() {
        assert_eq!(
            find_version_line("/*\nTheme Name: x\n*/"),
            Err(VersionError::NotFound)
        );
    }

    #[test]
    fn bump_rewrites_only_the_version_line() {
        let header = "<?php\n/**\n* Plugin Name: Demo\n* Version:   1.0.0  \n* Author: Jane\n*/";
        let bump = bump_header_version(header).unwrap();
        assert_eq!(bump.previous, "1.0.0");
        assert_eq!(bump.next, "1.0.1");
        assert_eq!(
            bump.text,
            "<?php\n/**\n* Plugin Name: Demo\n* Version: 1.0.1\n* Author: Jane\n*/"
        );
    }

    #[test]
    fn bump_normalizes_space_before_colon() {
        let bump = bump_header_version("/*\nVersion : 1\n*/").unwrap();
        assert_eq!(bump.text, "/*\nVersion: 2\n*/");
    }
}
