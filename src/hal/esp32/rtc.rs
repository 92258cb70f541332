//! ESP32 RTC implementation using the ESP-IDF time-of-day API.

use core::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::traits::{HardwareRtc, RawTime};

/// ESP32 time-of-day store.
///
/// Reads and writes the system time kept by ESP-IDF through
/// `gettimeofday`/`settimeofday`. ESP-IDF keeps it running from the RTC
/// timer, so it survives deep sleep (but not a power loss).
///
/// # Example
///
/// ```ignore
/// use rtc_wallclock::hal::esp32::{retained, Esp32Rtc};
/// use rtc_wallclock::overflow::CompensatedRtc;
/// use rtc_wallclock::WallClock;
///
/// let rtc = CompensatedRtc::with_overflow(Esp32Rtc::new(), retained::overflow());
/// let clock = WallClock::from_access(rtc, 3600);
/// println!("{}", clock.date_time(Default::default()));
/// ```
pub struct Esp32Rtc;

impl Esp32Rtc {
    /// Creates a new ESP32 RTC handle.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Esp32Rtc {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareRtc for Esp32Rtc {
    fn set_raw(&mut self, time: RawTime) {
        let tv = esp_idf_hal::sys::timeval {
            tv_sec: time.secs as esp_idf_hal::sys::time_t,
            tv_usec: time.micros as esp_idf_hal::sys::suseconds_t,
        };
        // Safe: `tv` outlives the call and a null timezone is accepted
        let rc = unsafe { esp_idf_hal::sys::settimeofday(&tv, core::ptr::null()) };
        if rc != 0 {
            warn!("settimeofday failed: {}", rc);
        }
    }

    fn get_raw(&self) -> RawTime {
        let mut tv = esp_idf_hal::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        // Safe: `tv` is a valid out-pointer and the timezone argument is unused
        unsafe { esp_idf_hal::sys::gettimeofday(&mut tv, core::ptr::null_mut()) };
        RawTime::new(tv.tv_sec.max(0) as u64, tv.tv_usec.max(0) as u32)
    }
}

/// Overflow flag kept in RTC slow memory across deep sleep.
///
/// ESP-IDF keeps the time of day running through deep sleep, so a shifted
/// value in the RTC is still shifted after wake-up. Save the flag before
/// sleeping and hand it to
/// [`CompensatedRtc::with_overflow`](crate::overflow::CompensatedRtc::with_overflow)
/// after waking.
pub mod retained {
    use super::*;

    #[link_section = ".rtc.data"]
    static OVERFLOW: AtomicBool = AtomicBool::new(false);

    /// Flag saved before the last deep sleep (false after a cold boot).
    pub fn overflow() -> bool {
        OVERFLOW.load(Ordering::Relaxed)
    }

    /// Saves the flag for the next wake-up.
    pub fn save_overflow(overflow: bool) {
        OVERFLOW.store(overflow, Ordering::Relaxed);
    }
}
