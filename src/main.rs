//! headerbump binary entry point.

use headerbump::cli::{self, Reported};
use headerbump::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        // Pipeline failures have already been reported
        if err.downcast_ref::<Reported>().is_none() {
            output::error(format!("{:#}", err));
        }
        std::process::exit(1);
    }
}
