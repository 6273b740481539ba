//! core
//!
//! Core domain types and the pure parsing pieces of a version bump.
//!
//! # Modules
//!
//! - [`target`] - Resolution of the index file input
//! - [`content`] - Reading, line-ending normalization, writing
//! - [`header`] - Header comment extraction for both dialects
//! - [`version`] - `Version:` lookup and increment
//! - [`record`] - Header comment to metadata record codec
//! - [`manifest`] - `package.json` version lookup
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The header dialect is decided once and carried, never re-sniffed
//! - Every function here except the content I/O helpers is pure

pub mod config;
pub mod content;
pub mod header;
pub mod manifest;
pub mod record;
pub mod target;
pub mod version;
