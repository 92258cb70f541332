//! Clock configuration shared by desktop and ESP32 builds.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::config::ClockConfig;
//!
//! // UTC, no initial time
//! let config = ClockConfig::default();
//! assert_eq!(config.offset_secs, 0);
//!
//! // Central European Time, start at 2021-01-01 if nothing else sets it
//! let config = ClockConfig::default()
//!     .with_name("cet")
//!     .with_offset_hours(1)
//!     .with_initial_epoch(1_609_459_200);
//! assert_eq!(config.offset_secs, 3600);
//! ```

use heapless::String as HString;

/// Maximum length for short config strings (clock labels)
pub const MAX_SHORT_STRING: usize = 32;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Epoch written by [`WallClock::set_default_time`](crate::WallClock::set_default_time):
/// 2021-01-01 00:00:00 UTC.
pub const DEFAULT_EPOCH: u64 = 1_609_459_200;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, c)| i + c.len_utf8() <= take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

/// Wall clock configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockConfig {
    /// Label used in log lines
    pub name: ShortString,
    /// Fixed UTC offset in seconds, applied on every read
    pub offset_secs: i32,
    /// Epoch written at construction (None = leave the hardware as is)
    pub initial_epoch: Option<u64>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            name: short_string("rtc"),
            offset_secs: 0,
            initial_epoch: None,
        }
    }
}

impl ClockConfig {
    /// Set the log label
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }

    /// Set the UTC offset in seconds
    pub fn with_offset_secs(mut self, secs: i32) -> Self {
        self.offset_secs = secs;
        self
    }

    /// Set the UTC offset in whole hours
    pub fn with_offset_hours(self, hours: i32) -> Self {
        self.with_offset_secs(hours.saturating_mul(3600))
    }

    /// Set the epoch written at construction
    pub fn with_initial_epoch(mut self, epoch: u64) -> Self {
        self.initial_epoch = Some(epoch);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
