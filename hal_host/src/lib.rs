//! # Host Hardware Abstraction Layer
//!
//! This crate implements the HAL traits on a hosted (std) platform, so the
//! same polling code that runs on firmware can run on a workstation.

pub mod timer;

pub use timer::HostTimerDevice;
