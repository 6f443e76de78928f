//! # Blink Runner
//!
//! The polling loop: reset once, then poll the timer and report every fire.

use std::fmt;
use std::time::Duration;

use hal::{Ticks, TimerDevice};
use interval_timer::IntervalTimer;
use log::{debug, info};
use thiserror::Error;
use timer_config::{ConfigError, TimerConfig};

/// Runner error types
#[derive(Debug, Error)]
pub enum BlinkdError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkdConfig {
    /// Timer settings
    pub timer: TimerConfig,
    /// Stop after this many fires (0 = unlimited)
    pub max_fires: u64,
    /// Pause between polls
    pub poll_interval: Duration,
}

impl Default for BlinkdConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::new(340),
            max_fires: 0,
            poll_interval: Duration::from_micros(1_000),
        }
    }
}

/// One elapsed interval, as seen by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkEvent {
    /// 1-based count of fires since start
    pub fire: u64,
    /// Counter reading at which the interval elapsed
    pub at: Ticks,
    /// Toggle output after this fire
    pub on: bool,
}

impl fmt::Display for BlinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.on { "on" } else { "off" };
        write!(f, "tick {}: {}", self.fire, state)
    }
}

/// Polls one interval timer against an injected clock
#[derive(Debug)]
pub struct BlinkRunner<T: TimerDevice> {
    clock: T,
    timer: IntervalTimer,
    fires: u64,
    polls: u64,
}

impl<T: TimerDevice> BlinkRunner<T> {
    /// Creates a runner from a timer configuration
    pub fn new(config: &TimerConfig, clock: T) -> Result<Self, BlinkdError> {
        let timer = config.build_timer()?;
        info!(
            "blink interval {} ms ({} at {} Hz)",
            config.interval_ms,
            timer.interval(),
            config.tick_hz
        );
        Ok(Self::with_timer(timer, clock))
    }

    /// Creates a runner around an existing timer
    pub fn with_timer(timer: IntervalTimer, clock: T) -> Self {
        Self {
            clock,
            timer,
            fires: 0,
            polls: 0,
        }
    }

    /// Baselines the timer at the current clock reading
    pub fn start(&mut self) {
        self.timer.reset(&mut self.clock);
        self.fires = 0;
        self.polls = 0;
    }

    /// Polls once; returns the event if the interval elapsed
    pub fn step(&mut self) -> Option<BlinkEvent> {
        self.timer.poll(&mut self.clock);
        self.polls += 1;

        if !self.timer.fired() {
            return None;
        }

        self.fires += 1;
        let event = BlinkEvent {
            fire: self.fires,
            at: self.timer.last_fired(),
            on: self.timer.toggle(),
        };
        info!("{} at {}", event, event.at);
        Some(event)
    }

    /// Runs the loop until `max_fires` fires (forever if 0)
    ///
    /// `idle` is called after every poll that does not end the run, fired or
    /// not, and is where the host sleeps. `emit` receives every event before
    /// that pause. Returns the number of fires.
    pub fn run<I, E>(&mut self, max_fires: u64, mut idle: I, mut emit: E) -> u64
    where
        I: FnMut(),
        E: FnMut(&BlinkEvent),
    {
        self.start();

        loop {
            if let Some(event) = self.step() {
                emit(&event);
            }
            if max_fires != 0 && self.fires >= max_fires {
                break;
            }
            idle();
        }

        debug!("stopped after {} fires in {} polls", self.fires, self.polls);
        self.fires
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }

    pub fn fires(&self) -> u64 {
        self.fires
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}
