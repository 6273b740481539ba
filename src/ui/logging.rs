//! ui::logging
//!
//! Diagnostic logging setup.
//!
//! Logs are written to stderr by a compact `tracing-subscriber` layer. The
//! filter comes from `RUST_LOG` when set, otherwise `headerbump=warn`, or
//! `headerbump=debug` with `--debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "headerbump=debug"
    } else {
        "headerbump=warn"
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
