//! core::header
//!
//! Locating the structured header comment at the start of a source file.
//!
//! # Dialects
//!
//! Two header syntaxes are supported, selected once by a prefix sniff:
//!
//! - [`Dialect::Php`]: content starts with `<?php`. The tag is followed by
//!   `/**` on its own line, interior lines each starting with `*`, and a
//!   closing `*/`.
//! - [`Dialect::Block`]: anything else. The content must start with `/*` or
//!   `/*!` followed by a newline, then arbitrary lines up to the first line
//!   beginning with `*/`.
//!
//! The header must sit at offset 0. There is no search elsewhere in the
//! file and no fallback from one dialect to the other.
//!
//! # Example
//!
//! ```
//! use headerbump::core::header::{extract_header, Dialect};
//!
//! let content = "<?php\n/**\n* Version: 1.0.0\n*/\n// code";
//! let header = extract_header(content).unwrap();
//!
//! assert_eq!(header.dialect(), Dialect::Php);
//! assert_eq!(header.text(), "<?php\n/**\n* Version: 1.0.0\n*/");
//! ```

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Opening tag that selects the PHP dialect.
pub const PHP_OPEN_TAG: &str = "<?php";

/// Errors from header extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("file content is empty")]
    Empty,

    #[error("header comment not found or malformed ({dialect} dialect expected at start of file)")]
    NotFound { dialect: Dialect },
}

/// Header comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `<?php` followed by a `/** ... */` docblock.
    Php,
    /// Plain `/* ... */` or `/*! ... */` block (CSS themes).
    Block,
}

impl Dialect {
    /// Pick the dialect for a file's content.
    pub fn sniff(content: &str) -> Self {
        if content.starts_with(PHP_OPEN_TAG) {
            Dialect::Php
        } else {
            Dialect::Block
        }
    }

    /// Whether headers in this dialect carry the PHP opening tag.
    pub fn is_php(&self) -> bool {
        matches!(self, Dialect::Php)
    }

    fn pattern(&self) -> &'static Regex {
        static PHP: OnceLock<Regex> = OnceLock::new();
        static BLOCK: OnceLock<Regex> = OnceLock::new();

        match self {
            Dialect::Php => PHP.get_or_init(|| {
                Regex::new(r"^<\?php\n/\*\*\n(?:\*.*\n)*\*/").expect("php header regex must compile")
            }),
            Dialect::Block => BLOCK.get_or_init(|| {
                Regex::new(r"^/\*!?\n(?:.*\n)*?\*/").expect("block header regex must compile")
            }),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Php => write!(f, "php"),
            Dialect::Block => write!(f, "block"),
        }
    }
}

/// The header comment found at the start of a file.
///
/// Holds the exact matched text (markers included), the dialect it was
/// matched with, and its byte span in the content it came from. The span
/// always starts at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderComment {
    text: String,
    dialect: Dialect,
    span: Range<usize>,
}

impl HeaderComment {
    /// Build a header from already-extracted text.
    ///
    /// The span is taken to be `0..text.len()`.
    pub fn new(text: impl Into<String>, dialect: Dialect) -> Self {
        let text = text.into();
        let span = 0..text.len();
        Self {
            text,
            dialect,
            span,
        }
    }

    /// The matched header text, markers included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The dialect this header was matched with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Byte range of the header within the source content.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Return a copy of this header with different text, same dialect.
    ///
    /// The span still describes where the *original* header sat, so it
    /// can be used to splice the new text over the old one.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dialect: self.dialect,
            span: self.span.clone(),
        }
    }

    /// Replace this header's span in `content` with `replacement`.
    ///
    /// This is a byte-range splice, so header text that recurs later in
    /// the file is never touched.
    pub fn splice_into(&self, content: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(content.len() + replacement.len());
        out.push_str(&content[..self.span.start]);
        out.push_str(replacement);
        out.push_str(&content[self.span.end..]);
        out
    }
}

/// Extract the header comment at offset 0 of normalized content.
///
/// # Errors
///
/// - `HeaderError::Empty` if the content is empty
/// - `HeaderError::NotFound` if the sniffed dialect's pattern does not
///   match at the start of the content
pub fn extract_header(content: &str) -> Result<HeaderComment, HeaderError> {
    if content.is_empty() {
        return Err(HeaderError::Empty);
    }

    let dialect = Dialect::sniff(content);
    let found = dialect
        .pattern()
        .find(content)
        .filter(|m| m.start() == 0)
        .ok_or(HeaderError::NotFound { dialect })?;

    Ok(HeaderComment {
        text: found.as_str().to_string(),
        dialect,
        span: found.range(),
    })
}
