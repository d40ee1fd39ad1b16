//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_TICK_INTERVAL_MS` | 500 | Wall-clock time between ticks |
//! | `BLOCKFALL_CELL_WIDTH` | 2 | Terminal columns per board cell |
//! | `BLOCKFALL_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `BLOCKFALL_LOG` | `info` | `tracing` filter directive |
//!
//! Unparsable or out-of-range values fall back to the default.
//!
//! The tick interval only paces the clock. Every tick adds half a second of
//! game time whatever the interval, so the TIME readout and the piece draws
//! follow tick count, not the wall clock.

use std::env;
use std::time::Duration;

const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
const DEFAULT_CELL_WIDTH: u16 = 2;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_interval_ms: u64,
    pub cell_width: u16,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cell_width: DEFAULT_CELL_WIDTH,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_interval_ms = lookup("BLOCKFALL_TICK_INTERVAL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

        let cell_width = lookup("BLOCKFALL_CELL_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&w: &u16| (1..=4).contains(&w))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("BLOCKFALL_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            tick_interval_ms,
            cell_width,
            log_path,
            log_filter,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
