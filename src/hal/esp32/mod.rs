//! ESP32 hardware abstraction layer for the wall clock.
//!
//! # Hardware Configuration
//!
//! - **MCU**: any ESP32 family chip running ESP-IDF (tested on ESP32-C3)
//! - **Clock source**: ESP-IDF system time, driven by the RTC timer
//!
//! The RTC timer keeps counting through deep sleep. Pair it with
//! [`retained`] so the overflow flag survives too.

mod rtc;

pub use rtc::{retained, Esp32Rtc};
