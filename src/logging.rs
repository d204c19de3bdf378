//! Minimal `log` backend writing to stderr, so stdout stays free for reports.

use std::env;

use chrono::Utc;
use log::{LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {:<5} [{}] {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

pub const LOG_ENV: &str = "BATTLESHIP_SIM_LOG";

/// Level named by `BATTLESHIP_SIM_LOG`, or `info` if unset or invalid.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. A second call leaves the first logger in place.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    // one test so no other case races on the variable
    #[test]
    fn level_follows_env_with_info_fallback() {
        env::remove_var(LOG_ENV);
        assert_eq!(level_from_env(), LevelFilter::Info);

        env::set_var(LOG_ENV, "debug");
        assert_eq!(level_from_env(), LevelFilter::Debug);

        env::set_var(LOG_ENV, "chatty");
        assert_eq!(level_from_env(), LevelFilter::Info);

        env::remove_var(LOG_ENV);
    }
}
