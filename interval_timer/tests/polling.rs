//! Interval timer driven by simulated clocks.
//!
//! These tests poll through the `TimerDevice` seam the way firmware does,
//! instead of feeding timestamps directly.

use hal::{Ticks, TimerDevice};
use interval_timer::IntervalTimer;
use sim_timer::{FakeTimerDevice, SimTimerDevice};

#[test]
fn test_blink_sequence_from_scripted_clock() {
    // reset, then one poll per reading
    let mut clock = FakeTimerDevice::new(vec![0, 50, 100, 250]);
    let mut timer = IntervalTimer::new(Ticks(100));
    timer.reset(&mut clock);

    let mut observed = Vec::new();
    while clock.remaining() > 0 {
        timer.poll(&mut clock);
        observed.push((timer.fired(), timer.toggle(), timer.last_fired()));
    }

    assert_eq!(
        observed,
        vec![
            (false, false, Ticks(0)),
            (true, true, Ticks(100)),
            (true, false, Ticks(250)),
        ]
    );
}

#[test]
fn test_fast_polling_fires_once_per_interval() {
    let mut clock = SimTimerDevice::new();
    let mut timer = IntervalTimer::new(Ticks(25));
    timer.reset(&mut clock);

    let mut fires = 0;
    let mut flips = 0;
    let mut last_toggle = timer.toggle();
    for _ in 0..1_000 {
        clock.advance_ticks(1);
        timer.poll(&mut clock);
        if timer.fired() {
            fires += 1;
        }
        if timer.toggle() != last_toggle {
            flips += 1;
            last_toggle = timer.toggle();
        }
    }

    assert_eq!(fires, 40);
    assert_eq!(flips, 40);
    assert!(!timer.toggle());
}

#[test]
fn test_slow_polling_drifts_instead_of_phase_locking() {
    let mut clock = SimTimerDevice::new();
    let mut timer = IntervalTimer::new(Ticks(10));
    timer.reset(&mut clock);

    // Poll every 13 ticks: each fire re-baselines at the poll instant.
    let mut fire_times = Vec::new();
    for _ in 0..4 {
        clock.advance_ticks(13);
        timer.poll(&mut clock);
        assert!(timer.fired());
        fire_times.push(timer.last_fired());
    }

    assert_eq!(fire_times, vec![Ticks(13), Ticks(26), Ticks(39), Ticks(52)]);
}

#[test]
fn test_single_poll_after_many_intervals_flips_once() {
    let mut clock = SimTimerDevice::with_initial_ticks(500);
    let mut timer = IntervalTimer::new(Ticks(20));
    timer.reset(&mut clock);

    clock.advance_ticks(20 * 7);
    timer.poll(&mut clock);

    assert!(timer.fired());
    assert!(timer.toggle());
    assert_eq!(timer.last_fired(), Ticks(640));
}

#[test]
fn test_counter_wrap_is_transparent() {
    let mut clock = SimTimerDevice::with_initial_ticks(u32::MAX - 500);
    let mut timer = IntervalTimer::new(Ticks(200));
    timer.reset(&mut clock);

    let mut fires = Vec::new();
    for _ in 0..10 {
        clock.advance_ticks(100);
        timer.poll(&mut clock);
        if timer.fired() {
            fires.push(timer.last_fired());
        }
    }

    let start = Ticks(u32::MAX - 500);
    let expected: Vec<Ticks> = [200, 400, 600, 800, 1000]
        .iter()
        .map(|&offset| start.wrapping_add(Ticks(offset)))
        .collect();
    assert_eq!(fires, expected);
}

#[test]
fn test_one_clock_serves_independent_timers() {
    let mut clock = SimTimerDevice::new();
    let mut fast = IntervalTimer::new(Ticks(10));
    let mut slow = IntervalTimer::new(Ticks(30));
    fast.reset(&mut clock);
    slow.reset(&mut clock);

    let mut fast_fires = 0;
    let mut slow_fires = 0;
    for _ in 0..60 {
        clock.advance_ticks(1);
        fast.poll(&mut clock);
        slow.poll(&mut clock);
        fast_fires += usize::from(fast.fired());
        slow_fires += usize::from(slow.fired());
    }

    assert_eq!(fast_fires, 6);
    assert_eq!(slow_fires, 2);
}

#[test]
fn test_reset_rebaselines_mid_interval() {
    let mut clock = SimTimerDevice::new();
    let mut timer = IntervalTimer::new(Ticks(100));
    timer.reset(&mut clock);

    clock.advance_ticks(90);
    timer.reset(&mut clock);
    clock.advance_ticks(90);
    timer.poll(&mut clock);
    assert!(!timer.fired());

    clock.advance_ticks(10);
    timer.poll(&mut clock);
    assert!(timer.fired());
}

#[test]
fn test_poll_through_trait_object() {
    let mut clock = SimTimerDevice::new();
    let device: &mut dyn TimerDevice = &mut clock;
    let mut timer = IntervalTimer::new(Ticks(0));

    timer.reset(device);
    timer.poll(device);
    assert!(timer.fired());
    assert_eq!(clock.poll_count(), 2);
}
