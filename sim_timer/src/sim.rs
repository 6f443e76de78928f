//! Hand-driven simulated timer.

use hal::{Ticks, TimerDevice};

/// Simulated timer device with controllable time progression
///
/// This timer only advances when explicitly instructed via
/// `advance_ticks()` or `set_ticks()`.
///
/// # Examples
///
/// ```
/// use hal::{Ticks, TimerDevice};
/// use sim_timer::SimTimerDevice;
///
/// let mut timer = SimTimerDevice::new();
/// assert_eq!(timer.poll_ticks(), Ticks(0));
///
/// timer.advance_ticks(100);
/// assert_eq!(timer.poll_ticks(), Ticks(100));
///
/// timer.advance_ticks(50);
/// assert_eq!(timer.poll_ticks(), Ticks(150));
/// ```
#[derive(Debug, Clone)]
pub struct SimTimerDevice {
    /// Current tick count
    ticks: Ticks,
    /// Number of times the device has been read
    polls: u64,
}

impl SimTimerDevice {
    /// Creates a new simulated timer starting at tick 0
    pub fn new() -> Self {
        Self::with_initial_ticks(0)
    }

    /// Creates a new simulated timer starting at a specific tick count
    ///
    /// Starting just below `u32::MAX` is the easiest way to exercise
    /// wraparound.
    pub fn with_initial_ticks(ticks: u32) -> Self {
        Self {
            ticks: Ticks(ticks),
            polls: 0,
        }
    }

    /// Advances the timer by the specified number of ticks
    ///
    /// The counter wraps to zero past `u32::MAX`, exactly like a hardware
    /// counter.
    pub fn advance_ticks(&mut self, delta: u32) {
        self.ticks = self.ticks.wrapping_add(Ticks(delta));
    }

    /// Jumps the counter to an absolute value
    ///
    /// No monotonicity check is made: a smaller value models a wrapped
    /// counter.
    pub fn set_ticks(&mut self, ticks: u32) {
        self.ticks = Ticks(ticks);
    }

    /// Returns the current tick count without counting as a poll
    pub fn current_ticks(&self) -> Ticks {
        self.ticks
    }

    /// Returns how many times `poll_ticks()` has been called
    pub fn poll_count(&self) -> u64 {
        self.polls
    }
}

impl Default for SimTimerDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerDevice for SimTimerDevice {
    fn poll_ticks(&mut self) -> Ticks {
        self.polls += 1;
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_timer_starts_at_zero() {
        let mut timer = SimTimerDevice::new();
        assert_eq!(timer.poll_ticks(), Ticks(0));
        assert_eq!(timer.poll_ticks(), Ticks(0));
    }

    #[test]
    fn test_sim_timer_advance() {
        let mut timer = SimTimerDevice::with_initial_ticks(1000);
        timer.advance_ticks(24);
        assert_eq!(timer.current_ticks(), Ticks(1024));
    }

    #[test]
    fn test_sim_timer_wraps() {
        let mut timer = SimTimerDevice::with_initial_ticks(u32::MAX - 1);
        let start = timer.poll_ticks();
        timer.advance_ticks(3);

        let now = timer.poll_ticks();
        assert_eq!(now, Ticks(1));
        assert_eq!(now.wrapping_sub(start), Ticks(3));
    }

    #[test]
    fn test_sim_timer_set_ticks() {
        let mut timer = SimTimerDevice::new();
        timer.set_ticks(500);
        assert_eq!(timer.poll_ticks(), Ticks(500));
        timer.set_ticks(7);
        assert_eq!(timer.poll_ticks(), Ticks(7));
    }

    #[test]
    fn test_current_ticks_is_not_a_poll() {
        let mut timer = SimTimerDevice::new();
        let _ = timer.current_ticks();
        assert_eq!(timer.poll_count(), 0);

        timer.poll_ticks();
        timer.poll_ticks();
        assert_eq!(timer.poll_count(), 2);
    }
}
