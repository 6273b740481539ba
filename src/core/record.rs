//! core::record
//!
//! Conversion between header comments and ordered metadata records.
//!
//! # Decoding
//!
//! Every interior `Key: value` line of a header becomes one record entry.
//! Structural lines (`<?php`, `/**`, `*/`, a lone `*`, `/*!`), annotation
//! lines (`* @...`) and blank lines are skipped. Keys go through
//! [`to_kebab_case`]. Entry order follows line order; a repeated key keeps
//! its first position and takes the last value.
//!
//! # Encoding
//!
//! [`encode`] writes a record back as a `/** ... */` docblock, prefixed by
//! `<?php` for the PHP dialect. Annotation and blank lines dropped by
//! decoding are not restored.
//!
//! # Example
//!
//! ```
//! use headerbump::core::header::Dialect;
//! use headerbump::core::record::{decode, encode};
//!
//! let header = "<?php\n/**\n* Plugin Name: Demo\n* Version: 1.0.1\n*/";
//! let record = decode(header, Dialect::Php);
//!
//! assert_eq!(record.get("plugin_name"), Some("Demo"));
//! assert_eq!(
//!     encode(&record, Dialect::Php),
//!     "<?php\n/**\n* plugin_name: Demo\n* version: 1.0.1\n*/"
//! );
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::header::{Dialect, PHP_OPEN_TAG};

/// Key under which the plugin flag is serialized.
pub const IS_PLUGIN_KEY: &str = "is_plugin";

/// Lines that only carry comment structure.
const STRUCTURAL_LINES: &[&str] = &[PHP_OPEN_TAG, "/**", "*/", "*", "/*!"];

/// Ordered key/value metadata derived from a header comment.
///
/// Serializes to a JSON object with the header entries in order, followed
/// by `is_plugin` when it has been set. A header entry already named
/// `is_plugin` keeps its position and takes the flag's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: IndexMap<String, String>,
    is_plugin: Option<bool>,
    /// Index of the entry the flag is serialized before; `None` means last.
    flag_slot: Option<usize>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry. Overwriting keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of header entries (the plugin flag is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no header entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The plugin flag, if set.
    pub fn is_plugin(&self) -> Option<bool> {
        self.is_plugin
    }

    /// Set the plugin flag.
    ///
    /// A header entry that happens to be named `is_plugin` is replaced by
    /// the flag at the same position, so the serialized object never
    /// carries the key twice.
    pub fn set_is_plugin(&mut self, is_plugin: bool) {
        if let Some((idx, _, _)) = self.entries.shift_remove_full(IS_PLUGIN_KEY) {
            self.flag_slot = Some(idx);
        }
        self.is_plugin = Some(is_plugin);
    }

    /// Pretty-printed JSON (2-space indent, no trailing newline).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + usize::from(self.is_plugin.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        let slot = self.flag_slot.unwrap_or(self.entries.len());
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx == slot {
                if let Some(flag) = self.is_plugin {
                    map.serialize_entry(IS_PLUGIN_KEY, &flag)?;
                }
            }
            map.serialize_entry(key, value)?;
        }
        if slot >= self.entries.len() {
            if let Some(flag) = self.is_plugin {
                map.serialize_entry(IS_PLUGIN_KEY, &flag)?;
            }
        }
        map.end()
    }
}

/// Lowercase a header key and turn its spaces into underscores.
///
/// Only spaces are rewritten; hyphens and camelCase pass through as-is, so
/// `"Requires at least"` becomes `"requires_at_least"` and `"Text-Domain"`
/// becomes `"text-domain"`.
pub fn to_kebab_case(key: &str) -> String {
    key.replace(' ', "_").to_lowercase()
}

/// Whether a line carries no metadata.
fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || STRUCTURAL_LINES.contains(&trimmed) || trimmed.starts_with("* @")
}

/// Remove the `*` prefix of a PHP docblock line, with one following space.
fn strip_star_prefix(line: &str) -> &str {
    let rest = line.trim_start();
    let Some(rest) = rest.strip_prefix('*') else {
        return rest;
    };
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
        _ => rest,
    }
}

/// Decode a header comment into a record.
pub fn decode(comment: &str, dialect: Dialect) -> MetadataRecord {
    let mut record = MetadataRecord::new();

    for line in comment.split('\n') {
        if is_skipped(line) {
            continue;
        }

        let line = if dialect.is_php() {
            strip_star_prefix(line)
        } else {
            line
        };

        let Some(idx) = line.find(": ") else {
            continue;
        };
        let key = line[..idx].trim();
        let value = line[idx + 2..].trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        record.insert(to_kebab_case(key), value);
    }

    record
}

/// Encode a record as a header comment.
///
/// The plugin flag is not part of the comment.
pub fn encode(record: &MetadataRecord, dialect: Dialect) -> String {
    let mut lines = Vec::with_capacity(record.len() + 3);
    if dialect.is_php() {
        lines.push(PHP_OPEN_TAG.to_string());
    }
    lines.push("/**".to_string());
    for (key, value) in record.iter() {
        lines.push(format!("* {}: {}", key, value));
    }
    lines.push("*/".to_string());
    lines.join("\n")
}
