//! Desktop RTC backed by the host's monotonic clock.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::traits::{HardwareRtc, RawTime};

/// RTC emulation for desktop builds.
///
/// Remembers the last written value together with the [`Instant`] it was
/// written at, and reads back that value plus the time elapsed since. It
/// never touches the host's wall clock, so it needs no privileges.
///
/// # Example
///
/// ```rust
/// use rtc_wallclock::hal::SystemRtc;
/// use rtc_wallclock::traits::{HardwareRtc, RawTime};
///
/// let mut rtc = SystemRtc::new();
/// rtc.set_raw(RawTime::new(1_609_459_200, 0));
///
/// let now = rtc.get_raw();
/// assert!(now.secs >= 1_609_459_200);
/// ```
#[derive(Debug, Clone)]
pub struct SystemRtc {
    base: RawTime,
    anchor: Instant,
}

impl SystemRtc {
    /// Creates an RTC counting up from the Unix epoch.
    pub fn new() -> Self {
        Self::starting_at(RawTime::default())
    }

    /// Creates an RTC counting up from `time`.
    pub fn starting_at(time: RawTime) -> Self {
        Self {
            base: time,
            anchor: Instant::now(),
        }
    }

    /// Creates an RTC seeded from the host's wall clock.
    ///
    /// A host clock set before 1970 seeds the Unix epoch.
    pub fn from_host_clock() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::starting_at(RawTime::new(
            since_epoch.as_secs(),
            since_epoch.subsec_micros(),
        ))
    }
}

impl Default for SystemRtc {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareRtc for SystemRtc {
    fn set_raw(&mut self, time: RawTime) {
        self.base = time;
        self.anchor = Instant::now();
    }

    fn get_raw(&self) -> RawTime {
        let elapsed = self.anchor.elapsed();
        let micros = u64::from(self.base.micros) + u64::from(elapsed.subsec_micros());
        let secs = self
            .base
            .secs
            .saturating_add(elapsed.as_secs())
            .saturating_add(micros / 1_000_000);
        RawTime::new(secs, (micros % 1_000_000) as u32)
    }
}
