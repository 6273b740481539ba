//! ui::output
//!
//! Progress and status messages.
//!
//! Every message goes to stderr; stdout belongs to pipeline outputs and
//! command results. Diagnostics use `tracing` instead (see
//! [`super::logging`]).

use std::fmt::Display;

/// How chatty the tool is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Progress lines
    Normal,
    /// Progress lines plus debug logging
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Whether progress lines are shown.
    pub fn shows_progress(self) -> bool {
        self != Verbosity::Quiet
    }
}

fn emit(tag: &str, message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_progress() {
        eprintln!("{}{}", tag, message);
    }
}

/// A progress line.
pub fn print(message: impl Display, verbosity: Verbosity) {
    emit("", message, verbosity);
}

/// A completed step.
pub fn success(message: impl Display, verbosity: Verbosity) {
    emit("✓ ", message, verbosity);
}

/// Something the user should know about, but not a failure.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    emit("warning: ", message, verbosity);
}

/// A failure. Shown even in quiet mode.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Render `key: value` lines, each starting with `prefix`.
pub fn format_fields<K: Display, V: Display>(fields: &[(K, V)], prefix: &str) -> String {
    let mut out = String::new();
    for (idx, (key, value)) in fields.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}{}: {}", prefix, key, value));
    }
    out
}
