//! # Interval Timer
//!
//! A non-blocking interval timer for loop-polled control code.
//!
//! ## Philosophy
//!
//! - **Polled**: the owning loop calls [`IntervalTimer::poll`] as often as it
//!   likes; nothing happens between polls
//! - **Injected time**: the clock is passed in, never read from a global
//! - **Allocation-free**: two timestamps and two flags, usable on bare metal
//!
//! ## Signals
//!
//! After each poll the timer exposes:
//! - [`fired`](IntervalTimer::fired): true only on the poll during which the
//!   interval elapsed
//! - [`toggle`](IntervalTimer::toggle): flips every time the interval
//!   elapses, which is what a blinking LED wants
//!
//! ## Example
//!
//! ```
//! use hal::Ticks;
//! use interval_timer::IntervalTimer;
//! use sim_timer::SimTimerDevice;
//!
//! let mut clock = SimTimerDevice::new();
//! let mut timer = IntervalTimer::new(Ticks(340));
//! timer.reset(&mut clock);
//!
//! clock.advance_ticks(340);
//! timer.poll(&mut clock);
//! assert!(timer.fired());
//! assert!(timer.toggle());
//! ```

#![no_std]

use hal::{Ticks, TimerDevice};
use log::{debug, trace};

/// Polled interval timer with a one-shot and a toggling output.
///
/// # Precondition
///
/// Call [`reset`](Self::reset) before relying on [`poll`](Self::poll).
/// Until then the baseline is tick 0, so the first poll measures elapsed
/// time from whatever the counter's origin happens to be.
///
/// # Under-sampling
///
/// Elapsed time is re-baselined to the poll instant, not advanced by whole
/// intervals. If several intervals pass between two polls, that poll fires
/// once and flips the toggle once.
///
/// The timer is not meant to outlive its clock: `last_fired` is only
/// meaningful against the counter it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Ticks,
    last_fired: Ticks,
    fired: bool,
    toggle: bool,
}

impl IntervalTimer {
    /// Creates a timer that elapses every `interval` ticks.
    ///
    /// A zero interval elapses on every poll.
    pub const fn new(interval: Ticks) -> Self {
        Self {
            interval,
            last_fired: Ticks::ZERO,
            fired: false,
            toggle: false,
        }
    }

    /// Re-baselines the timer at the clock's current reading and clears both
    /// outputs.
    pub fn reset<T: TimerDevice + ?Sized>(&mut self, clock: &mut T) {
        self.reset_at(clock.poll_ticks());
    }

    /// Re-baselines the timer at `now` and clears both outputs.
    pub fn reset_at(&mut self, now: Ticks) {
        self.last_fired = now;
        self.fired = false;
        self.toggle = false;
        debug!("interval timer reset at {} (interval {})", now, self.interval);
    }

    /// Samples the clock and updates the outputs.
    pub fn poll<T: TimerDevice + ?Sized>(&mut self, clock: &mut T) {
        self.poll_at(clock.poll_ticks());
    }

    /// Updates the outputs as if the clock read `now`.
    pub fn poll_at(&mut self, now: Ticks) {
        if self.elapsed_at(now) >= self.interval {
            self.last_fired = now;
            self.fired = true;
            self.toggle = !self.toggle;
            trace!("interval elapsed at {}, toggle now {}", now, self.toggle);
        } else {
            self.fired = false;
        }
    }

    /// Ticks elapsed since the last fire (or reset) as of `now`.
    pub fn elapsed_at(&self, now: Ticks) -> Ticks {
        now.wrapping_sub(self.last_fired)
    }

    /// True only if the most recent poll observed the interval elapse.
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Flips every time the interval elapses; cleared by reset.
    #[doc(alias = "blink")]
    pub fn toggle(&self) -> bool {
        self.toggle
    }

    /// Ticks that must pass between fires.
    pub fn interval(&self) -> Ticks {
        self.interval
    }

    /// The instant the interval last elapsed, or the reset baseline.
    pub fn last_fired(&self) -> Ticks {
        self.last_fired
    }
}
