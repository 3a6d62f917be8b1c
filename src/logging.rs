// Diagnostics go to stderr so stdout carries only the report line.

use tracing::Level;

/// Fixed verbosity; the program reads no flags or environment.
pub const LOG_LEVEL: Level = Level::WARN;

pub fn init() {
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
