//! Hardware abstraction for the time-of-day store behind a real-time clock.
//!
//! The clock core never keeps its own tick source. It writes and reads the
//! current time through [`HardwareRtc`], which on real hardware is backed by
//! the RTC peripheral (or the platform's `settimeofday`/`gettimeofday`) and
//! on desktop by one of the implementations in [`crate::hal`].
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`RawTime`] | Seconds + microseconds as stored by the hardware |
//! | [`HardwareRtc`] | Raw set/get primitives of the time-of-day store |
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::traits::{HardwareRtc, RawTime};
//! use rtc_wallclock::hal::MockRtc;
//!
//! let mut rtc = MockRtc::new();
//! rtc.set_raw(RawTime::new(1_609_459_200, 250_000));
//!
//! let now = rtc.get_raw();
//! assert_eq!(now.secs, 1_609_459_200);
//! assert_eq!(now.millis(), 250);
//! ```

/// A raw reading of the hardware clock, the `timeval` analog.
///
/// `secs` is whatever the hardware holds, which is a shifted value while
/// overflow compensation is active. See [`crate::overflow`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTime {
    /// Whole seconds held by the store.
    pub secs: u64,
    /// Sub-second part in microseconds.
    ///
    /// Written verbatim; the store does not normalize values above 999 999.
    pub micros: u32,
}

impl RawTime {
    /// Creates a raw reading from seconds and microseconds.
    #[inline]
    pub const fn new(secs: u64, micros: u32) -> Self {
        Self { secs, micros }
    }

    /// Sub-second part truncated to milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtc_wallclock::traits::RawTime;
    ///
    /// assert_eq!(RawTime::new(0, 999_999).millis(), 999);
    /// assert_eq!(RawTime::new(0, 999).millis(), 0);
    /// ```
    #[inline]
    pub const fn millis(&self) -> u32 {
        self.micros / 1000
    }
}

/// Time-of-day store of a real-time clock.
///
/// Implement this for your RTC peripheral. Both calls are treated as
/// atomic and infallible; tick advancement between calls is the
/// hardware's business and is not modeled here.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use rtc_wallclock::traits::{HardwareRtc, RawTime};
///
/// struct MyRtc { /* peripheral handle */ }
///
/// impl HardwareRtc for MyRtc {
///     fn set_raw(&mut self, time: RawTime) {
///         // Write counter registers...
///     }
///
///     fn get_raw(&self) -> RawTime {
///         // Read counter registers...
///         RawTime::new(0, 0)
///     }
/// }
/// ```
pub trait HardwareRtc {
    /// Overwrites the stored time.
    fn set_raw(&mut self, time: RawTime);

    /// Reads the stored time.
    fn get_raw(&self) -> RawTime;
}

impl<R: HardwareRtc + ?Sized> HardwareRtc for &mut R {
    fn set_raw(&mut self, time: RawTime) {
        (**self).set_raw(time);
    }

    fn get_raw(&self) -> RawTime {
        (**self).get_raw()
    }
}
