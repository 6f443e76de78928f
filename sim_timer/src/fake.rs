//! Scripted fake timer.

use hal::{Ticks, TimerDevice};

/// Largest forward step a script may take between readings.
///
/// A step of half the counter range or more is indistinguishable from the
/// counter running backwards.
const MAX_STEP: u32 = u32::MAX / 2;

/// Fake timer device for testing
///
/// Returns a scripted sequence of readings, one per poll, and then keeps
/// returning the last one.
///
/// # Examples
///
/// ```
/// use hal::{Ticks, TimerDevice};
/// use sim_timer::FakeTimerDevice;
///
/// let mut timer = FakeTimerDevice::new(vec![0, 100, 200, 350]);
///
/// assert_eq!(timer.poll_ticks(), Ticks(0));
/// assert_eq!(timer.poll_ticks(), Ticks(100));
/// assert_eq!(timer.poll_ticks(), Ticks(200));
/// assert_eq!(timer.poll_ticks(), Ticks(350));
/// assert_eq!(timer.poll_ticks(), Ticks(350)); // Stays at last value
/// ```
#[derive(Debug)]
pub struct FakeTimerDevice {
    /// Scripted tick values to return
    ticks: Vec<Ticks>,
    /// Current index in the ticks array
    index: usize,
}

impl FakeTimerDevice {
    /// Creates a new fake timer with scripted tick values
    ///
    /// A sequence may wrap past `u32::MAX` back to small values.
    ///
    /// # Panics
    ///
    /// Panics if a step moves backwards, i.e. its wrapping forward
    /// distance is half the counter range or more.
    pub fn new(ticks: Vec<u32>) -> Self {
        for i in 1..ticks.len() {
            let step = ticks[i].wrapping_sub(ticks[i - 1]);
            assert!(
                step <= MAX_STEP,
                "Tick sequence must be monotonic: {} -> {} at index {}",
                ticks[i - 1],
                ticks[i],
                i
            );
        }

        Self {
            ticks: ticks.into_iter().map(Ticks).collect(),
            index: 0,
        }
    }

    /// Returns the number of remaining scripted values
    pub fn remaining(&self) -> usize {
        self.ticks.len().saturating_sub(self.index)
    }
}

impl TimerDevice for FakeTimerDevice {
    fn poll_ticks(&mut self) -> Ticks {
        match self.ticks.get(self.index) {
            Some(&value) => {
                self.index += 1;
                value
            }
            None => self.ticks.last().copied().unwrap_or(Ticks::ZERO),
        }
    }
}
