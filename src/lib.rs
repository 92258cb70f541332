//! # rtc-wallclock
//!
//! Wall-clock time on top of a hardware real-time clock, with a fixed UTC
//! offset and compensation for RTCs that cannot count past 2035.
//!
//! ## Features
//!
//! - **Hardware abstraction**: one small trait for the RTC's time-of-day store
//! - **Overflow compensation**: epochs past 2035-12-31 23:59:59 are stored
//!   shifted and transparently restored on read
//! - **Fixed offset**: one signed offset in seconds applied to every read
//! - **Bounded formatting**: C-locale strftime into fixed-capacity strings
//! - **Sharing**: several offset views of one RTC with a single overflow flag
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware abstraction for the RTC store
//! - `overflow` - Shift/flag scheme around the RTC
//! - `calendar` - Epoch to calendar fields and back
//! - `format` - Text rendering and derived fields
//! - `clock` - [`WallClock`], which ties everything together
//! - `hal` - Concrete RTCs (mock for testing, system for desktop, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rtc_wallclock::{WallClock, FormatStyle, hal::MockRtc};
//!
//! let mut clock = WallClock::new(MockRtc::new());
//!
//! // 00:00:00 on 1 January 2021
//! clock.set_time_parts(0, 0, 0, 1, 1, 2021, 0);
//! assert_eq!(clock.year(), 2021);
//! assert_eq!(clock.date(FormatStyle::Short).as_str(), "Fri, Jan 01 2021");
//!
//! // Past the RTC's range: stored shifted, read back as 2036
//! clock.set_time(2_082_758_399 + 10, 0);
//! assert!(clock.is_overflowed());
//! assert_eq!(clock.year(), 2036);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Epoch to calendar conversion and back.
pub mod calendar;
/// Wall clock with fixed offset over a compensated RTC.
pub mod clock;
/// Text rendering of calendar values.
pub mod format;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Overflow compensation for RTCs that saturate in 2035.
pub mod overflow;
/// Core traits for hardware abstraction.
pub mod traits;

/// Shared configuration system for desktop and ESP32.
pub mod config;

/// One RTC shared between several clock views (std only).
#[cfg(feature = "std")]
pub mod shared;

// Re-exports for convenience
pub use calendar::CalendarTime;
pub use clock::WallClock;
pub use format::{DateString, FormatError, FormatStyle, HourMode, PatternString};
pub use overflow::{CompensatedRtc, RtcAccess, RtcSnapshot, OVERFLOW_THRESHOLD};
pub use traits::{HardwareRtc, RawTime};

#[cfg(feature = "std")]
pub use shared::SharedRtc;

// Config re-exports
pub use config::{ClockConfig, DEFAULT_EPOCH};
