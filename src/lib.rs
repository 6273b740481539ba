//! headerbump - version bumping for WordPress plugin and theme headers
//!
//! headerbump is a single-binary CI step. It reads the version from the
//! structured comment at the top of a plugin's main PHP file or a theme's
//! `style.css` (or from `package.json`), increments the last numeric
//! segment, rewrites the file in place, writes the header fields to
//! `metadata.json`, and reports the new version to the CI pipeline.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates ResolveTarget → ReadAndNormalize →
//!   ExtractAndBumpVersion → Substitute → PersistOutputs
//! - [`core`] - Header parsing, version increment, metadata codec, config
//! - [`pipeline`] - CI platform abstraction (GitHub Actions, console, memory)
//! - [`ui`] - Output and logging
//!
//! # Example
//!
//! ```
//! use headerbump::core::header::extract_header;
//! use headerbump::core::record::decode;
//! use headerbump::core::version::bump_header_version;
//!
//! let content = "<?php\n/**\n* Plugin Name: Demo\n* Version: 1.0.0\n*/\n// code";
//! let header = extract_header(content).unwrap();
//! let bump = bump_header_version(header.text()).unwrap();
//!
//! assert_eq!(bump.next, "1.0.1");
//! assert_eq!(decode(&bump.text, header.dialect()).get("version"), Some("1.0.1"));
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod pipeline;
pub mod ui;
