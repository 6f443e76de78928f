//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the time abstraction shared by every clock
//! implementation and by the interval timer.
//!
//! ## Philosophy
//!
//! **Time is a capability, not a global.**
//!
//! Code that needs "now" receives a [`TimerDevice`] instead of calling a
//! platform function such as `millis()`. Firmware hands it a hardware
//! counter, the host hands it an `Instant`-backed clock, and tests hand it a
//! simulated clock they control tick by tick.
//!
//! ## Design Principles
//!
//! 1. **No platform assumptions**: nothing here knows what drives the counter
//! 2. **Trait-based**: every time read goes through [`TimerDevice`]
//! 3. **Fixed width**: timestamps and durations share [`Ticks`], so elapsed
//!    time is a wrapping subtraction that survives counter overflow
//! 4. **Testable**: the trait is trivially faked

#![no_std]

pub mod timer;

pub use timer::{TickRate, Ticks, TimerDevice};
