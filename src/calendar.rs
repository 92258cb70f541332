//! Calendar breakdown of epoch seconds.
//!
//! [`CalendarTime`] is the value every read of the clock ends in. It is a
//! plain `Copy` struct with `tm`-style fields (zero-based month, Sunday-based
//! weekday, zero-based year-day) but a full year instead of `year - 1900`.
//!
//! Conversions use the proleptic Gregorian calendar in UTC with no DST.
//! Epoch to calendar goes through `chrono`; calendar to epoch is a closed
//! form that normalizes out-of-range fields the way `mktime` does.
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::calendar::{civil_to_epoch, CalendarTime};
//!
//! let epoch = civil_to_epoch(2021, 1, 1, 0, 0, 0);
//! assert_eq!(epoch, 1_609_459_200);
//!
//! let cal = CalendarTime::from_epoch(epoch);
//! assert_eq!(cal.year, 2021);
//! assert_eq!(cal.month, 0);
//! assert_eq!(cal.weekday, 5); // Friday
//! assert_eq!(cal.to_epoch(), epoch);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Seconds in one civil day.
pub const SECS_PER_DAY: i64 = 86_400;

/// Broken-down calendar time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarTime {
    /// Full year, e.g. 2021.
    pub year: i32,
    /// Month of the year, 0-11.
    pub month: u32,
    /// Day of the month, 1-31.
    pub day: u32,
    /// Hour of the day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
    /// Day of the week, 0-6 with Sunday = 0.
    pub weekday: u32,
    /// Day of the year, 0-365.
    pub yearday: u32,
}

impl Default for CalendarTime {
    fn default() -> Self {
        Self::from_epoch(0)
    }
}

impl CalendarTime {
    /// Breaks epoch seconds down into calendar fields.
    ///
    /// Epochs outside the range `chrono` can represent (hundreds of
    /// thousands of years) collapse to 1970-01-01 00:00:00.
    pub fn from_epoch(epoch: i64) -> Self {
        let naive = DateTime::from_timestamp(epoch, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default();
        Self::from_naive(&naive)
    }

    /// Builds calendar fields from a `chrono` date-time.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month0(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            weekday: dt.weekday().num_days_from_sunday(),
            yearday: dt.ordinal0(),
        }
    }

    /// Converts back to epoch seconds.
    ///
    /// Weekday and year-day are ignored and the remaining fields are
    /// normalized, so `month: 12` lands in January of the next year.
    pub fn to_epoch(&self) -> i64 {
        civil_to_epoch(
            i64::from(self.year),
            i64::from(self.month) + 1,
            i64::from(self.day),
            i64::from(self.hour),
            i64::from(self.minute),
            i64::from(self.second),
        )
    }

    /// Converts to a `chrono` date-time for formatting.
    ///
    /// Returns `None` when the fields do not name a real instant
    /// (e.g. a hand-built value with `day: 31` in February).
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
///
/// `month` must already be in 1-12; `day` may be any value and is
/// added linearly.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Converts calendar fields to epoch seconds, UTC.
///
/// `month` is 1-12. Every field is normalized instead of rejected: month 13
/// is January of the following year, day 0 is the last day of the previous
/// month, second 60 is the next minute, and negative values borrow.
///
/// # Examples
///
/// ```
/// use rtc_wallclock::calendar::civil_to_epoch;
///
/// assert_eq!(civil_to_epoch(1970, 1, 1, 0, 0, 0), 0);
/// assert_eq!(civil_to_epoch(2020, 13, 1, 0, 0, 0), civil_to_epoch(2021, 1, 1, 0, 0, 0));
/// assert_eq!(civil_to_epoch(2021, 3, 0, 0, 0, 0), civil_to_epoch(2021, 2, 28, 0, 0, 0));
/// ```
pub fn civil_to_epoch(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> i64 {
    let month0 = month - 1;
    let year = year + month0.div_euclid(12);
    let month = month0.rem_euclid(12) + 1;

    let days = days_from_civil(year, month, 1) + day - 1;
    days * SECS_PER_DAY + hour * 3_600 + minute * 60 + second
}
