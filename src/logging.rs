#![cfg(feature = "std")]

//! Stderr sink for the `log` records emitted by the rules core.

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the level filter (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter for a raw `BATTLESHIP_LOG` value.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Route records to stderr, keeping stdout for the board. Unset or
/// unreadable `BATTLESHIP_LOG` means `warn`. A second call is a no-op.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
