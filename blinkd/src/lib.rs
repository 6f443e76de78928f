//! # Blink Host Runtime
//!
//! Drives a single interval timer from a real clock, the way a firmware main
//! loop would drive an LED.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: the runner reports events, the binary prints them
//! - **Clock is injected**: the same runner runs against the host clock or a
//!   simulated one
//! - **Deterministic mode is first-class**: every loop decision is testable

pub mod runner;

pub use runner::{BlinkEvent, BlinkRunner, BlinkdConfig, BlinkdError};
