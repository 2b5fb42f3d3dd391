//! Runtime configuration
//!
//! Defaults are overridden first by environment variables, then by
//! command-line flags.
//!
//! - `ALGOTRACE_AUTOPLAY_MS`: milliseconds between autoplay steps (default 800)

use log::warn;
use std::time::Duration;

pub const DEFAULT_AUTOPLAY_MS: u64 = 800;
pub const AUTOPLAY_ENV: &str = "ALGOTRACE_AUTOPLAY_MS";

/// Where a finished run goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Interactive terminal playback
    #[default]
    Tui,
    /// Print every step as plain text
    Text,
    /// Print the whole run as JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between steps while autoplay is on
    pub autoplay_interval: Duration,
    pub output: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(DEFAULT_AUTOPLAY_MS),
            output: OutputMode::Tui,
        }
    }
}

impl Config {
    /// Defaults plus any overrides found in the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(AUTOPLAY_ENV) {
            match parse_interval(&v) {
                Some(interval) => cfg.autoplay_interval = interval,
                None => warn!("ignoring {}={:?}: expected a positive integer", AUTOPLAY_ENV, v),
            }
        }

        cfg
    }

    pub fn with_autoplay_ms(mut self, ms: Option<u64>) -> Self {
        if let Some(ms) = ms.filter(|ms| *ms > 0) {
            self.autoplay_interval = Duration::from_millis(ms);
        }
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

fn parse_interval(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
