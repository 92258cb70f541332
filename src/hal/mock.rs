//! Mock implementations for testing without hardware.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockRtc`] | [`HardwareRtc`] | Controllable time-of-day store that records writes |
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::{WallClock, hal::MockRtc};
//!
//! let mut clock = WallClock::new(MockRtc::new());
//! clock.set_time(1_609_459_200, 0);
//!
//! // Let the "hardware" tick
//! clock.rtc_mut().hardware_mut().advance_secs(90);
//! assert_eq!(clock.minute(), 1);
//! assert_eq!(clock.second(), 30);
//! ```
//!
//! [`HardwareRtc`]: crate::traits::HardwareRtc

use crate::traits::{HardwareRtc, RawTime};

/// Mock RTC for testing.
///
/// Holds the current raw time and only moves when told to, so tests can
/// step across interesting instants deterministically. Every `set_raw`
/// call is recorded.
///
/// # Example
///
/// ```rust
/// use rtc_wallclock::hal::MockRtc;
/// use rtc_wallclock::traits::{HardwareRtc, RawTime};
///
/// let mut rtc = MockRtc::new();
/// assert_eq!(rtc.get_raw(), RawTime::new(0, 0));
/// assert!(rtc.last_written().is_none());
///
/// rtc.set_raw(RawTime::new(1000, 0));
/// rtc.advance_micros(1_500_000);
/// assert_eq!(rtc.get_raw(), RawTime::new(1001, 500_000));
///
/// assert_eq!(rtc.write_count, 1);
/// assert_eq!(rtc.last_written(), Some(RawTime::new(1000, 0)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockRtc {
    current: RawTime,
    last_written: Option<RawTime>,
    /// Number of times `set_raw` was called.
    pub write_count: usize,
}

impl MockRtc {
    /// Creates a mock RTC holding the Unix epoch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock RTC already holding `time`, as if the hardware had
    /// retained it across a reset. Does not count as a write.
    pub fn with_time(mut self, time: RawTime) -> Self {
        self.current = time;
        self
    }

    /// Advances the stored seconds.
    pub fn advance_secs(&mut self, secs: u64) {
        self.current.secs = self.current.secs.saturating_add(secs);
    }

    /// Advances the stored time by microseconds, carrying into seconds.
    pub fn advance_micros(&mut self, micros: u64) {
        let total = u64::from(self.current.micros) + micros;
        self.advance_secs(total / 1_000_000);
        self.current.micros = (total % 1_000_000) as u32;
    }

    /// The value passed to the most recent `set_raw`, if any.
    pub fn last_written(&self) -> Option<RawTime> {
        self.last_written
    }
}

impl HardwareRtc for MockRtc {
    fn set_raw(&mut self, time: RawTime) {
        self.current = time;
        self.last_written = Some(time);
        self.write_count += 1;
    }

    fn get_raw(&self) -> RawTime {
        self.current
    }
}
