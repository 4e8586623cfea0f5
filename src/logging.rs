// SPDX-License-Identifier: MIT
//
// stderr logging. `RUST_LOG` wins when set; otherwise the `-v` count picks
// the level. Stdout stays reserved for command output.

use tracing_subscriber::EnvFilter;

/// Level for a given number of `-v` flags.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
