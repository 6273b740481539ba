//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Progress and status messages
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Design
//!
//! Stdout carries pipeline outputs and command results only; progress
//! messages and diagnostics go to stderr.

pub mod logging;
pub mod output;
