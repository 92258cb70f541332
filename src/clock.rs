//! Wall-clock view of a compensated RTC with a fixed UTC offset.
//!
//! This module provides [`WallClock`], the main entry point of the crate.
//!
//! # Overview
//!
//! A wall clock:
//! - Writes epoch or calendar time to the RTC, compensating for the 2035
//!   overflow boundary
//! - Reads the RTC back as a [`CalendarTime`], with the offset applied
//! - Formats the current time for display
//!
//! Every read goes back to the hardware; nothing is cached, so consecutive
//! getters can straddle a second boundary. Take one [`time_struct`] and
//! read its fields when several must agree.
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::{WallClock, FormatStyle, HourMode, hal::MockRtc};
//!
//! // UTC+1
//! let mut clock = WallClock::with_offset(MockRtc::new(), 3600);
//!
//! // 08:34:20 on 1 April 2021 (UTC)
//! clock.set_time_parts(20, 34, 8, 1, 4, 2021, 0);
//!
//! assert_eq!(clock.hour(HourMode::TwentyFour), 9);
//! assert_eq!(clock.date_time(FormatStyle::Short).as_str(), "Thu, Apr 01 2021 09:34:20");
//! assert_eq!(clock.local_epoch(), 1_617_266_060);
//! assert_eq!(clock.epoch(), 1_617_266_060 + 3600);
//! ```
//!
//! [`time_struct`]: WallClock::time_struct

use log::debug;

use crate::calendar::{civil_to_epoch, CalendarTime};
use crate::config::{ClockConfig, DEFAULT_EPOCH};
use crate::format::{DateString, FormatError, FormatStyle, HourMode, PatternString};
use crate::overflow::{CompensatedRtc, RtcAccess};
use crate::traits::HardwareRtc;

/// Wall clock over a compensated RTC.
///
/// # Type Parameter
///
/// - `A`: access to the RTC and its overflow flag ([`RtcAccess`]), either
///   an owned [`CompensatedRtc`] or a [`SharedRtc`](crate::SharedRtc)
///
/// # Thread Safety
///
/// An owned clock needs `&mut self` to set the time, so it is confined to
/// one task by the borrow checker. For several views of one RTC, build
/// them from a [`SharedRtc`](crate::SharedRtc).
#[derive(Debug)]
pub struct WallClock<A: RtcAccess> {
    rtc: A,
    offset_secs: i32,
}

impl<R: HardwareRtc> WallClock<CompensatedRtc<R>> {
    /// Create a UTC wall clock that owns `rtc`.
    pub fn new(rtc: R) -> Self {
        Self::with_offset(rtc, 0)
    }

    /// Create a wall clock that owns `rtc` and reads `offset_secs` ahead of UTC.
    pub fn with_offset(rtc: R, offset_secs: i32) -> Self {
        Self::from_access(CompensatedRtc::new(rtc), offset_secs)
    }

    /// Create a wall clock from configuration.
    ///
    /// Writes `config.initial_epoch` to the RTC when it is set.
    pub fn from_config(rtc: R, config: &ClockConfig) -> Self {
        let mut clock = Self::with_offset(rtc, config.offset_secs);
        if let Some(epoch) = config.initial_epoch {
            debug!("[{}] initial time {}", config.name, epoch);
            clock.set_time(epoch, 0);
        }
        clock
    }
}

impl<A: RtcAccess> WallClock<A> {
    /// Create a wall clock over any RTC access.
    pub fn from_access(rtc: A, offset_secs: i32) -> Self {
        Self { rtc, offset_secs }
    }

    /// Fixed UTC offset in seconds.
    #[inline]
    pub fn offset_secs(&self) -> i32 {
        self.offset_secs
    }

    /// The underlying RTC access.
    pub fn rtc(&self) -> &A {
        &self.rtc
    }

    /// Mutable access to the underlying RTC.
    pub fn rtc_mut(&mut self) -> &mut A {
        &mut self.rtc
    }

    /// Releases the underlying RTC access.
    pub fn into_inner(self) -> A {
        self.rtc
    }

    /// Whether the RTC currently holds a shifted value.
    pub fn is_overflowed(&self) -> bool {
        self.rtc.snapshot().overflow
    }

    // =========================================================================
    // Setting
    // =========================================================================

    /// Set the RTC to `epoch` seconds (UTC) and `micros` microseconds.
    ///
    /// Epochs past 2035-12-31 23:59:59 are stored shifted; see
    /// [`crate::overflow`].
    pub fn set_time(&mut self, epoch: u64, micros: u32) {
        self.rtc.store(epoch, micros);
    }

    /// Set the RTC from calendar fields, `month` being 1-12.
    ///
    /// Out-of-range fields are normalized the way `mktime` does it (month
    /// 13 is January of the next year). The offset is not applied; the
    /// fields are taken as UTC. Times before 1970 clamp to the epoch.
    ///
    /// Argument order is seconds first: `set_time_parts(20, 34, 8, 1, 4, 2021, 0)`
    /// is 08:34:20 on 1 April 2021.
    #[allow(clippy::too_many_arguments)]
    pub fn set_time_parts(
        &mut self,
        second: i32,
        minute: i32,
        hour: i32,
        day: i32,
        month: i32,
        year: i32,
        micros: u32,
    ) {
        let epoch = civil_to_epoch(
            i64::from(year),
            i64::from(month),
            i64::from(day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
        );
        self.set_time(clamp_epoch(epoch), micros);
    }

    /// Set the RTC from a calendar value (weekday and year-day ignored).
    pub fn set_calendar(&mut self, cal: &CalendarTime) {
        self.set_time(clamp_epoch(cal.to_epoch()), 0);
    }

    /// Set the RTC to [`DEFAULT_EPOCH`] (2021-01-01 00:00:00).
    pub fn set_default_time(&mut self) {
        self.set_time(DEFAULT_EPOCH, 0);
    }

    // =========================================================================
    // Core Read
    // =========================================================================

    /// Current epoch with the overflow shift undone and the offset added.
    fn offset_epoch(&self) -> i64 {
        self.rtc
            .snapshot()
            .true_epoch()
            .saturating_add(i64::from(self.offset_secs))
    }

    /// Current local time as calendar fields.
    pub fn time_struct(&self) -> CalendarTime {
        CalendarTime::from_epoch(self.offset_epoch())
    }

    /// Current local time as epoch seconds (offset included).
    pub fn epoch(&self) -> i64 {
        self.time_struct().to_epoch()
    }

    /// Current UTC epoch straight from the RTC, shift undone, no offset.
    pub fn local_epoch(&self) -> u64 {
        let snap = self.rtc.snapshot();
        crate::overflow::unshift_epoch(snap.raw.secs, snap.overflow)
    }

    /// Milliseconds part of the RTC's sub-second field.
    pub fn millis(&self) -> u32 {
        self.rtc.snapshot().raw.millis()
    }

    /// Microseconds part of the RTC's sub-second field.
    pub fn micros(&self) -> u32 {
        self.rtc.snapshot().raw.micros
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Date, e.g. `Fri, Jan 01 2021` or `Friday, January 01 2021`.
    pub fn date(&self, style: FormatStyle) -> DateString {
        self.time_struct().date(style)
    }

    /// Time, `HH:MM:SS`.
    pub fn time(&self) -> DateString {
        self.time_struct().time()
    }

    /// Date then time, e.g. `Fri, Jan 01 2021 00:00:00`.
    pub fn date_time(&self, style: FormatStyle) -> DateString {
        self.time_struct().date_time(style)
    }

    /// Time then date, e.g. `00:00:00 Fri, Jan 01 2021`.
    pub fn time_date(&self, style: FormatStyle) -> DateString {
        self.time_struct().time_date(style)
    }

    /// Current time rendered with a strftime pattern.
    ///
    /// `%z`/`%Z` print the clock's offset.
    pub fn format(&self, pattern: &str) -> Result<PatternString, FormatError> {
        self.time_struct().format_at(pattern, self.offset_secs)
    }

    /// `"AM"`/`"PM"`, lowercased on request.
    pub fn am_pm(&self, lowercase: bool) -> &'static str {
        self.time_struct().am_pm(lowercase)
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Seconds, 0-59.
    pub fn second(&self) -> u32 {
        self.time_struct().second
    }

    /// Minutes, 0-59.
    pub fn minute(&self) -> u32 {
        self.time_struct().minute
    }

    /// Hour on a 24- or 12-hour face.
    pub fn hour(&self, mode: HourMode) -> u32 {
        self.time_struct().hour_in(mode)
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> u32 {
        self.time_struct().day
    }

    /// Day of the week, 0-6 (Sunday = 0).
    pub fn day_of_week(&self) -> u32 {
        self.time_struct().weekday
    }

    /// Day of the year, 0-365.
    pub fn day_of_year(&self) -> u32 {
        self.time_struct().yearday
    }

    /// Month, 0-11.
    pub fn month(&self) -> u32 {
        self.time_struct().month
    }

    /// Full year.
    pub fn year(&self) -> i32 {
        self.time_struct().year
    }
}

fn clamp_epoch(epoch: i64) -> u64 {
    u64::try_from(epoch).unwrap_or(0)
}
