//! # Host Timer Device
//!
//! A [`TimerDevice`] backed by `std::time::Instant`.
//!
//! ## Design Notes
//!
//! - Non-blocking: reading the clock never sleeps
//! - Monotonic: `Instant` never goes backwards
//! - Hardware-like: the reading is truncated to the 32-bit tick width, so it
//!   wraps exactly like an embedded counter would

use std::time::Instant;

use hal::{TickRate, Ticks, TimerDevice};
use log::debug;

/// Host clock counting ticks since construction
#[derive(Debug, Clone)]
pub struct HostTimerDevice {
    /// Instant that corresponds to `offset`
    epoch: Instant,
    /// Counter frequency
    rate: TickRate,
    /// Counter value at `epoch`
    offset: Ticks,
}

impl HostTimerDevice {
    /// Creates a clock that reads zero now and counts at `rate`
    pub fn new(rate: TickRate) -> Self {
        Self::with_offset(rate, Ticks::ZERO)
    }

    /// Creates a clock that reads `offset` now
    ///
    /// Starting close to `u32::MAX` lets a host run cross the wrap point
    /// within seconds instead of weeks.
    pub fn with_offset(rate: TickRate, offset: Ticks) -> Self {
        debug!("host timer started at {} ({})", offset, rate);
        Self {
            epoch: Instant::now(),
            rate,
            offset,
        }
    }

    pub fn rate(&self) -> TickRate {
        self.rate
    }

    /// Converts an elapsed time since `epoch` into a counter reading
    fn ticks_after(&self, elapsed_nanos: u128) -> Ticks {
        let ticks = elapsed_nanos * u128::from(self.rate.hz()) / 1_000_000_000;
        // Truncation to the counter width is the wraparound.
        self.offset.wrapping_add(Ticks(ticks as u32))
    }
}

impl Default for HostTimerDevice {
    fn default() -> Self {
        Self::new(TickRate::MILLIS)
    }
}

impl TimerDevice for HostTimerDevice {
    fn poll_ticks(&mut self) -> Ticks {
        self.ticks_after(self.epoch.elapsed().as_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_host_timer_starts_near_zero() {
        let mut timer = HostTimerDevice::new(TickRate::MILLIS);
        assert!(timer.poll_ticks() < Ticks(1_000));
    }

    #[test]
    fn test_host_timer_advances() {
        let mut timer = HostTimerDevice::new(TickRate::MILLIS);
        let start = timer.poll_ticks();
        thread::sleep(Duration::from_millis(15));
        let end = timer.poll_ticks();

        assert!(end.wrapping_sub(start) >= Ticks(15));
    }

    #[test]
    fn test_tick_conversion() {
        let timer = HostTimerDevice::new(TickRate::MILLIS);
        assert_eq!(timer.ticks_after(2_500_000), Ticks(2));

        let timer = HostTimerDevice::new(TickRate::MICROS);
        assert_eq!(timer.ticks_after(2_500_000), Ticks(2_500));
    }

    #[test]
    fn test_reading_wraps_at_counter_width() {
        let timer = HostTimerDevice::with_offset(TickRate::MILLIS, Ticks(u32::MAX - 4));
        assert_eq!(timer.ticks_after(0), Ticks(u32::MAX - 4));
        assert_eq!(timer.ticks_after(10_000_000), Ticks(5));
    }

    #[test]
    fn test_default_rate_is_millis() {
        assert_eq!(HostTimerDevice::default().rate(), TickRate::MILLIS);
    }
}
