//! Epoch overflow compensation for RTCs that saturate in 2035.
//!
//! The RTC this crate was built for cannot hold epochs past
//! [`OVERFLOW_THRESHOLD`] (2035-12-31 23:59:59 UTC). Later times are stored
//! shifted down by the threshold and an overflow flag records that the
//! stored value has to be shifted back on read.
//!
//! The flag describes the hardware clock, not any one view of it, so it
//! lives next to the hardware in [`CompensatedRtc`]. Views that share one
//! physical clock share it through [`SharedRtc`](crate::SharedRtc).
//!
//! # Calibration
//!
//! The read side is calibrated with two constants kept exactly as the
//! firmware has always used them:
//!
//! - [`SHIFT_ORIGIN`] (`63071999`, 1971-12-31 23:59:59): a shifted value of
//!   `s` seconds reads as `s` seconds past this instant.
//! - [`SHIFT_SPAN`] (`2019686400`): the 64 calendar years from 1972-01-01
//!   to 2036-01-01 in seconds, i.e. the `+64` year adjustment.
//!
//! Together they add back exactly [`OVERFLOW_THRESHOLD`].
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::hal::MockRtc;
//! use rtc_wallclock::overflow::{CompensatedRtc, RtcAccess, OVERFLOW_THRESHOLD};
//!
//! let mut rtc = CompensatedRtc::new(MockRtc::new());
//!
//! rtc.store(OVERFLOW_THRESHOLD + 10, 0);
//! assert!(rtc.is_overflowed());
//! assert_eq!(rtc.hardware().last_written().unwrap().secs, 10);
//!
//! assert_eq!(rtc.snapshot().true_epoch(), OVERFLOW_THRESHOLD as i64 + 10);
//! ```

use log::{debug, trace};

use crate::traits::{HardwareRtc, RawTime};

/// Largest epoch the hardware clock holds unshifted (2035-12-31 23:59:59 UTC).
pub const OVERFLOW_THRESHOLD: u64 = 2_082_758_399;

/// Instant a shifted raw value counts from (1971-12-31 23:59:59 UTC).
pub const SHIFT_ORIGIN: u64 = 63_071_999;

/// Length of the calendar years bridged by the shift.
pub const SHIFT_YEARS: i32 = 64;

/// [`SHIFT_YEARS`] in seconds, measured from 1972-01-01 (16 leap days).
pub const SHIFT_SPAN: u64 = 2_019_686_400;

const _: () = assert!(SHIFT_ORIGIN + SHIFT_SPAN == OVERFLOW_THRESHOLD);
const _: () = assert!(SHIFT_SPAN == (SHIFT_YEARS as u64 * 365 + 16) * 86_400);

/// Splits an epoch into the value the hardware stores and the overflow flag.
///
/// # Examples
///
/// ```
/// use rtc_wallclock::overflow::{shift_epoch, OVERFLOW_THRESHOLD};
///
/// assert_eq!(shift_epoch(OVERFLOW_THRESHOLD), (OVERFLOW_THRESHOLD, false));
/// assert_eq!(shift_epoch(OVERFLOW_THRESHOLD + 1), (1, true));
/// ```
#[inline]
pub const fn shift_epoch(epoch: u64) -> (u64, bool) {
    if epoch > OVERFLOW_THRESHOLD {
        (epoch - OVERFLOW_THRESHOLD, true)
    } else {
        (epoch, false)
    }
}

/// Reverses [`shift_epoch`] for a raw value read back from the hardware.
///
/// # Examples
///
/// ```
/// use rtc_wallclock::overflow::{shift_epoch, unshift_epoch};
///
/// let (raw, overflow) = shift_epoch(3_000_000_000);
/// assert_eq!(unshift_epoch(raw, overflow), 3_000_000_000);
/// ```
#[inline]
pub const fn unshift_epoch(raw: u64, overflow: bool) -> u64 {
    if overflow {
        raw.saturating_add(SHIFT_ORIGIN + SHIFT_SPAN)
    } else {
        raw
    }
}

/// One consistent reading of the hardware clock and the overflow flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RtcSnapshot {
    /// Value held by the hardware clock.
    pub raw: RawTime,
    /// Whether `raw.secs` is shifted.
    pub overflow: bool,
}

impl RtcSnapshot {
    /// Epoch seconds the hardware value stands for, with the shift undone.
    #[inline]
    pub fn true_epoch(&self) -> i64 {
        let epoch = unshift_epoch(self.raw.secs, self.overflow);
        i64::try_from(epoch).unwrap_or(i64::MAX)
    }
}

/// Access to a compensated hardware clock.
///
/// Implemented by [`CompensatedRtc`] for a clock owned by one view and by
/// [`SharedRtc`](crate::SharedRtc) for a clock shared between several.
pub trait RtcAccess {
    /// Stores `epoch`, shifting it and updating the overflow flag as needed.
    fn store(&mut self, epoch: u64, micros: u32);

    /// Reads the hardware clock and the overflow flag together.
    fn snapshot(&self) -> RtcSnapshot;
}

/// A hardware clock together with its overflow flag.
///
/// This is the only place the flag is written. Owning it by value makes a
/// single clock view race-free; wrap it in a [`SharedRtc`](crate::SharedRtc)
/// when several views address the same hardware.
#[derive(Debug, Default)]
pub struct CompensatedRtc<R: HardwareRtc> {
    rtc: R,
    overflow: bool,
}

impl<R: HardwareRtc> CompensatedRtc<R> {
    /// Wraps a hardware clock. The flag starts cleared.
    pub fn new(rtc: R) -> Self {
        Self::with_overflow(rtc, false)
    }

    /// Wraps a hardware clock whose flag was retained elsewhere.
    ///
    /// Use this after a deep-sleep wake when the flag was kept in
    /// retained memory while the hardware kept counting.
    pub fn with_overflow(rtc: R, overflow: bool) -> Self {
        Self { rtc, overflow }
    }

    /// Current value of the overflow flag.
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflow
    }

    /// The wrapped hardware clock.
    pub fn hardware(&self) -> &R {
        &self.rtc
    }

    /// Mutable access to the wrapped hardware clock.
    ///
    /// Writes made through this reference bypass compensation and leave
    /// the flag untouched.
    pub fn hardware_mut(&mut self) -> &mut R {
        &mut self.rtc
    }

    /// Releases the hardware clock and the flag.
    pub fn into_parts(self) -> (R, bool) {
        (self.rtc, self.overflow)
    }
}

impl<R: HardwareRtc> RtcAccess for CompensatedRtc<R> {
    fn store(&mut self, epoch: u64, micros: u32) {
        let (secs, overflow) = shift_epoch(epoch);

        if overflow != self.overflow {
            if overflow {
                debug!("epoch {} past threshold, storing shifted value {}", epoch, secs);
            } else {
                debug!("epoch {} within range, overflow compensation cleared", epoch);
            }
        }
        trace!("rtc write secs={} micros={}", secs, micros);

        self.overflow = overflow;
        self.rtc.set_raw(RawTime::new(secs, micros));
    }

    fn snapshot(&self) -> RtcSnapshot {
        RtcSnapshot {
            raw: self.rtc.get_raw(),
            overflow: self.overflow,
        }
    }
}

impl<A: RtcAccess + ?Sized> RtcAccess for &mut A {
    fn store(&mut self, epoch: u64, micros: u32) {
        (**self).store(epoch, micros);
    }

    fn snapshot(&self) -> RtcSnapshot {
        (**self).snapshot()
    }
}
