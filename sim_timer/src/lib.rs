//! # Simulated Clocks
//!
//! Deterministic [`TimerDevice`](hal::TimerDevice) implementations for
//! tests and simulation.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! Real clocks make timing tests flaky. The devices here only move when the
//! test says so, which makes every interval boundary reproducible.
//!
//! - [`SimTimerDevice`]: advanced by hand, can be driven across the counter
//!   wrap point
//! - [`FakeTimerDevice`]: replays a scripted sequence of readings

pub mod fake;
pub mod sim;

pub use fake::FakeTimerDevice;
pub use sim::SimTimerDevice;
