//! Trait definitions for hardware abstraction.
//!
//! This module defines the abstraction that lets rtc-wallclock run on
//! different hardware (ESP32, desktop, test mocks).
//!
//! # Submodules
//!
//! - `hardware`: Raw time-of-day store of a real-time clock
//!
//! # Hardware Abstraction
//!
//! - [`HardwareRtc`]: raw seconds + microseconds set/get
//! - [`RawTime`]: the value exchanged with the hardware

pub mod hardware;

pub use hardware::*;
