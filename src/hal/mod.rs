//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of
//! [`HardwareRtc`](crate::traits::HardwareRtc) for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Deterministic test RTC
//! - `system`: Desktop RTC following the host's monotonic clock (requires `std`)
//! - `esp32`: ESP-IDF system time (requires `esp32` feature)

pub mod mock;

#[cfg(feature = "std")]
pub mod system;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "std")]
pub use system::SystemRtc;

#[cfg(feature = "esp32")]
pub use esp32::*;
