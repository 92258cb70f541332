//! One hardware clock shared between several wall-clock views.
//!
//! The overflow flag belongs to the hardware, so every view of the same RTC
//! must see the same flag. [`SharedRtc`] puts the hardware and the flag
//! behind one mutex; each store and each snapshot takes the lock once, so a
//! reader can never pair a freshly shifted raw value with a stale flag.
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::{SharedRtc, hal::MockRtc};
//!
//! let rtc = SharedRtc::new(MockRtc::new());
//! let mut utc = rtc.clock(0);
//! let tokyo = rtc.clock(9 * 3600);
//!
//! utc.set_time_parts(0, 0, 0, 1, 1, 2021, 0);
//! assert_eq!(utc.hour(rtc_wallclock::HourMode::TwentyFour), 0);
//! assert_eq!(tokyo.hour(rtc_wallclock::HourMode::TwentyFour), 9);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::WallClock;
use crate::overflow::{CompensatedRtc, RtcAccess, RtcSnapshot};
use crate::traits::HardwareRtc;

/// Cloneable handle to a mutex-protected [`CompensatedRtc`].
///
/// # Thread Safety
///
/// Uses `Mutex` rather than `RwLock`: reads are a single register access
/// and writes are rare, so there is nothing to gain from shared readers.
pub struct SharedRtc<R: HardwareRtc> {
    inner: Arc<Mutex<CompensatedRtc<R>>>,
}

impl<R: HardwareRtc> Clone for SharedRtc<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: HardwareRtc> SharedRtc<R> {
    /// Wraps a hardware clock with a cleared overflow flag.
    pub fn new(rtc: R) -> Self {
        Self::from_compensated(CompensatedRtc::new(rtc))
    }

    /// Shares an already compensated clock, keeping its flag.
    pub fn from_compensated(rtc: CompensatedRtc<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rtc)),
        }
    }

    /// A wall-clock view of this RTC with its own fixed offset.
    pub fn clock(&self, offset_secs: i32) -> WallClock<SharedRtc<R>> {
        WallClock::from_access(self.clone(), offset_secs)
    }

    /// Current value of the shared overflow flag.
    pub fn is_overflowed(&self) -> bool {
        self.lock().is_overflowed()
    }

    /// Runs `f` with exclusive access to the compensated clock.
    pub fn with_rtc<T>(&self, f: impl FnOnce(&mut CompensatedRtc<R>) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    // The guarded state is two plain values written together, so a panic
    // while holding the lock cannot leave it torn.
    fn lock(&self) -> MutexGuard<'_, CompensatedRtc<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: HardwareRtc> RtcAccess for SharedRtc<R> {
    fn store(&mut self, epoch: u64, micros: u32) {
        self.lock().store(epoch, micros);
    }

    fn snapshot(&self) -> RtcSnapshot {
        self.lock().snapshot()
    }
}
