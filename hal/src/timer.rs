//! # Timer Device
//!
//! Hardware abstraction for monotonic time measurement.
//!
//! ## Philosophy
//!
//! **Time is a service, not a global variable.**
//!
//! This trait provides access to a monotonic tick counter. It does NOT:
//! - Provide wall-clock time (no UTC, no timezones)
//! - Block or sleep (polling only)
//! - Deliver interrupts or callbacks
//!
//! ## Wraparound
//!
//! Counters are [`Ticks`] wide (32 bits). A 1 kHz counter wraps after about
//! 49.7 days. Consumers must compute elapsed time with
//! [`Ticks::wrapping_sub`]; as long as the true elapsed time is shorter than
//! one full counter period the result is exact.

use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A point on, or a distance along, the monotonic tick counter.
///
/// Timestamps and durations deliberately share this type so that
/// `now.wrapping_sub(then)` is the elapsed duration even across a counter
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Ticks(pub u32);

impl Ticks {
    /// Tick zero
    pub const ZERO: Self = Self(0);

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Modular addition, used to step a counter forward past its limit.
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Modular subtraction.
    ///
    /// When `self` is a later timestamp than `earlier`, this is the elapsed
    /// time between them, regardless of whether the counter wrapped.
    pub const fn wrapping_sub(self, earlier: Self) -> Self {
        Self(self.0.wrapping_sub(earlier.0))
    }

    /// Converts a millisecond count into ticks at `rate`.
    ///
    /// Fractional ticks are truncated. Returns `None` when the result does
    /// not fit the counter width.
    pub fn from_millis(millis: u64, rate: TickRate) -> Option<Self> {
        let ticks = u128::from(millis) * u128::from(rate.hz()) / 1_000;
        u32::try_from(ticks).ok().map(Self)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

/// Counter frequency in ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct TickRate(u32);

impl TickRate {
    /// One tick per millisecond, the usual embedded `millis()` counter
    pub const MILLIS: Self = Self(1_000);
    /// One tick per microsecond
    pub const MICROS: Self = Self(1_000_000);

    pub const fn from_hz(hz: u32) -> Self {
        Self(hz)
    }

    pub const fn hz(self) -> u32 {
        self.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::MILLIS
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Hardware timer device trait
///
/// Provides access to a monotonic tick counter that only moves forward,
/// modulo wraparound at the counter width.
///
/// # Implementation Notes
///
/// - Must not block
/// - Tick frequency is implementation-defined
/// - Overflow wraps to zero and keeps counting
///
/// # Examples
///
/// ```
/// use hal::{Ticks, TimerDevice};
///
/// fn measure_operation<T: TimerDevice>(timer: &mut T) -> Ticks {
///     let start = timer.poll_ticks();
///     // ... do work ...
///     let end = timer.poll_ticks();
///     end.wrapping_sub(start)
/// }
/// ```
pub trait TimerDevice {
    /// Returns the current tick count
    ///
    /// This value is:
    /// - Monotonic (never decreases, except when the counter wraps)
    /// - Cumulative (ticks since boot or device initialization)
    /// - Non-blocking (returns immediately)
    fn poll_ticks(&mut self) -> Ticks;
}

impl<T: TimerDevice + ?Sized> TimerDevice for &mut T {
    fn poll_ticks(&mut self) -> Ticks {
        (**self).poll_ticks()
    }
}
