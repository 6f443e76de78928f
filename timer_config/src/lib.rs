//! # Timer Configuration
//!
//! Loads and saves the settings an interval timer is built from.
//!
//! The on-disk format is versioned JSON:
//!
//! ```json
//! { "version": 1, "interval_ms": 340, "tick_hz": 1000 }
//! ```
//!
//! `tick_hz` may be omitted and defaults to a millisecond counter.

use std::fs;
use std::path::Path;

use hal::{TickRate, Ticks};
use interval_timer::IntervalTimer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or applying a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for this schema
    #[error("Failed to parse timer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration was written by an incompatible version
    #[error("Unsupported timer configuration version: {0}")]
    UnsupportedVersion(u32),

    /// A counter that never ticks cannot measure an interval
    #[error("Tick rate must be non-zero")]
    ZeroTickRate,

    /// Interval does not fit the 32-bit tick counter
    #[error("Interval of {interval_ms} ms does not fit a counter at {tick_hz} Hz")]
    IntervalOverflow { interval_ms: u64, tick_hz: u32 },

    /// Non-zero interval shorter than one tick of the counter
    #[error("Interval of {interval_ms} ms is shorter than one tick at {tick_hz} Hz")]
    IntervalBelowResolution { interval_ms: u64, tick_hz: u32 },
}

fn default_tick_hz() -> u32 {
    TickRate::MILLIS.hz()
}

/// Serializable timer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Version of the configuration format
    pub version: u32,
    /// Interval between fires, in milliseconds
    pub interval_ms: u64,
    /// Frequency of the counter the timer is polled against
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

impl TimerConfig {
    /// Current version of the configuration format
    pub const CURRENT_VERSION: u32 = 1;

    /// Creates a configuration for a millisecond counter
    pub fn new(interval_ms: u64) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            interval_ms,
            tick_hz: default_tick_hz(),
        }
    }

    /// Sets the counter frequency
    pub fn with_tick_hz(mut self, tick_hz: u32) -> Self {
        self.tick_hz = tick_hz;
        self
    }

    /// Returns the counter frequency, rejecting a zero rate
    pub fn tick_rate(&self) -> ConfigResult<TickRate> {
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(TickRate::from_hz(self.tick_hz))
    }

    /// Converts the interval into counter ticks
    ///
    /// Only an explicit `interval_ms` of 0 yields a zero-tick interval; a
    /// non-zero interval that truncates to zero ticks is rejected.
    pub fn interval_ticks(&self) -> ConfigResult<Ticks> {
        let rate = self.tick_rate()?;
        let ticks =
            Ticks::from_millis(self.interval_ms, rate).ok_or(ConfigError::IntervalOverflow {
                interval_ms: self.interval_ms,
                tick_hz: self.tick_hz,
            })?;

        if ticks == Ticks::ZERO && self.interval_ms > 0 {
            return Err(ConfigError::IntervalBelowResolution {
                interval_ms: self.interval_ms,
                tick_hz: self.tick_hz,
            });
        }
        Ok(ticks)
    }

    /// Builds an un-reset timer from this configuration
    pub fn build_timer(&self) -> ConfigResult<IntervalTimer> {
        Ok(IntervalTimer::new(self.interval_ticks()?))
    }

    /// Parses and validates a configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ConfigResult<Self> {
        let config: TimerConfig = serde_json::from_slice(bytes)?;

        if config.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(config.version));
        }
        config.interval_ticks()?;

        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON
    pub fn to_json(&self) -> ConfigResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Reads a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Writes the configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
