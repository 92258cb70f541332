//! Text rendering and derived fields of a [`CalendarTime`].
//!
//! All output is C-locale strftime (English day and month names, zero
//! padded numbers) rendered by `chrono` into fixed-capacity
//! [`heapless::String`] buffers, so nothing here allocates and nothing can
//! overrun.
//!
//! # Example
//!
//! ```rust
//! use rtc_wallclock::{CalendarTime, FormatStyle, HourMode};
//!
//! let cal = CalendarTime::from_epoch(1_609_459_200 + 13 * 3600);
//!
//! assert_eq!(cal.date(FormatStyle::Short).as_str(), "Fri, Jan 01 2021");
//! assert_eq!(cal.date(FormatStyle::Long).as_str(), "Friday, January 01 2021");
//! assert_eq!(cal.time().as_str(), "13:00:00");
//! assert_eq!(cal.hour_in(HourMode::Twelve), 1);
//! assert_eq!(cal.am_pm(false), "PM");
//!
//! let custom = cal.format::<32>("%d/%m/%y").unwrap();
//! assert_eq!(custom.as_str(), "01/01/21");
//! ```

use core::fmt::{self, Write};

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::FixedOffset;
use heapless::String as HString;

use crate::calendar::CalendarTime;

/// Capacity of the fixed-style strings.
pub const MAX_DATE_STRING: usize = 64;

/// Capacity of strings rendered from caller-supplied patterns.
pub const MAX_PATTERN_STRING: usize = 128;

/// Output of the fixed date/time styles.
pub type DateString = HString<MAX_DATE_STRING>;

/// Output of a caller-supplied pattern.
pub type PatternString = HString<MAX_PATTERN_STRING>;

/// Long or short names in the fixed styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatStyle {
    /// Full names: `Friday, January 01 2021`.
    Long,
    /// Abbreviated names: `Fri, Jan 01 2021`.
    #[default]
    Short,
}

impl FormatStyle {
    /// Pattern for [`CalendarTime::date`].
    pub const fn date_pattern(self) -> &'static str {
        match self {
            FormatStyle::Long => "%A, %B %d %Y",
            FormatStyle::Short => "%a, %b %d %Y",
        }
    }

    /// Pattern for [`CalendarTime::date_time`].
    pub const fn date_time_pattern(self) -> &'static str {
        match self {
            FormatStyle::Long => "%A, %B %d %Y %H:%M:%S",
            FormatStyle::Short => "%a, %b %d %Y %H:%M:%S",
        }
    }

    /// Pattern for [`CalendarTime::time_date`].
    pub const fn time_date_pattern(self) -> &'static str {
        match self {
            FormatStyle::Long => "%H:%M:%S %A, %B %d %Y",
            FormatStyle::Short => "%H:%M:%S %a, %b %d %Y",
        }
    }
}

/// Pattern for [`CalendarTime::time`].
pub const TIME_PATTERN: &str = "%H:%M:%S";

/// Clock face used by [`CalendarTime::hour_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HourMode {
    /// 0-23.
    TwentyFour,
    /// 1-12, midnight and noon both read 12.
    #[default]
    Twelve,
}

/// Why a pattern could not be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The pattern has a specifier strftime does not know.
    InvalidPattern,
    /// The calendar fields do not name a real instant.
    InvalidDate,
    /// The pattern prints a UTC offset that is a day or more.
    InvalidOffset,
    /// The rendered text does not fit the output buffer.
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidPattern => f.write_str("invalid strftime pattern"),
            FormatError::InvalidDate => f.write_str("calendar fields are not a valid date"),
            FormatError::InvalidOffset => f.write_str("utc offset out of range for %z/%Z"),
            FormatError::Overflow => f.write_str("formatted time exceeds buffer capacity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// Maps a 0-23 hour onto a 12-hour clock face.
///
/// # Examples
///
/// ```
/// use rtc_wallclock::format::twelve_hour;
///
/// assert_eq!(twelve_hour(0), 12);
/// assert_eq!(twelve_hour(11), 11);
/// assert_eq!(twelve_hour(12), 12);
/// assert_eq!(twelve_hour(13), 1);
/// assert_eq!(twelve_hour(23), 11);
/// ```
#[inline]
pub const fn twelve_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        13.. => hour - 12,
        _ => hour,
    }
}

/// Items that print the zone and need an offset to render.
fn is_zone_item(item: &Item<'_>) -> bool {
    matches!(
        item,
        Item::Fixed(
            Fixed::TimezoneName
                | Fixed::TimezoneOffset
                | Fixed::TimezoneOffsetColon
                | Fixed::TimezoneOffsetDoubleColon
                | Fixed::TimezoneOffsetTripleColon
                | Fixed::TimezoneOffsetColonZ
                | Fixed::TimezoneOffsetZ
                | Fixed::RFC2822
                | Fixed::RFC3339
                | Fixed::Internal(_)
        )
    )
}

impl CalendarTime {
    /// Renders the time with a strftime pattern into an `N`-byte buffer.
    ///
    /// The fields are taken as UTC: `%z` prints `+0000`.
    pub fn format<const N: usize>(&self, pattern: &str) -> Result<HString<N>, FormatError> {
        self.format_at(pattern, 0)
    }

    /// Renders the time with a strftime pattern, the fields being local
    /// time `offset_secs` ahead of UTC.
    ///
    /// `%z` and `%Z` print the offset (`+0100`, `+01:00`); offsets of a day
    /// or more cannot be printed and fail with [`FormatError::InvalidOffset`].
    pub fn format_at<const N: usize>(
        &self,
        pattern: &str,
        offset_secs: i32,
    ) -> Result<HString<N>, FormatError> {
        let naive = self.to_naive().ok_or(FormatError::InvalidDate)?;

        let items = StrftimeItems::new(pattern);
        let mut uses_zone = false;
        for item in items.clone() {
            if matches!(item, Item::Error) {
                return Err(FormatError::InvalidPattern);
            }
            uses_zone |= is_zone_item(&item);
        }

        let mut out = HString::new();
        let written = if uses_zone {
            let zone = FixedOffset::east_opt(offset_secs).ok_or(FormatError::InvalidOffset)?;
            let local = naive
                .and_local_timezone(zone)
                .single()
                .ok_or(FormatError::InvalidDate)?;
            write!(out, "{}", local.format_with_items(items))
        } else {
            write!(out, "{}", naive.format_with_items(items))
        };
        written.map_err(|_| FormatError::Overflow)?;
        Ok(out)
    }

    /// Fixed styles always fit; an impossible hand-built value renders empty.
    fn fixed(&self, pattern: &str) -> DateString {
        self.format(pattern).unwrap_or_default()
    }

    /// Date only, e.g. `Fri, Jan 01 2021`.
    pub fn date(&self, style: FormatStyle) -> DateString {
        self.fixed(style.date_pattern())
    }

    /// Time only, `HH:MM:SS`.
    pub fn time(&self) -> DateString {
        self.fixed(TIME_PATTERN)
    }

    /// Date followed by time.
    pub fn date_time(&self, style: FormatStyle) -> DateString {
        self.fixed(style.date_time_pattern())
    }

    /// Time followed by date.
    pub fn time_date(&self, style: FormatStyle) -> DateString {
        self.fixed(style.time_date_pattern())
    }

    /// Hour on the requested clock face.
    pub fn hour_in(&self, mode: HourMode) -> u32 {
        match mode {
            HourMode::TwentyFour => self.hour,
            HourMode::Twelve => twelve_hour(self.hour),
        }
    }

    /// `"AM"`/`"PM"`, or `"am"`/`"pm"` when `lowercase`.
    pub fn am_pm(&self, lowercase: bool) -> &'static str {
        match (self.hour >= 12, lowercase) {
            (false, false) => "AM",
            (false, true) => "am",
            (true, false) => "PM",
            (true, true) => "pm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::civil_to_epoch;

    fn at(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> CalendarTime {
        CalendarTime::from_epoch(civil_to_epoch(year, month, day, hour, minute, second))
    }

    // =========================================================================
    // Fixed Styles
    // =========================================================================

    #[test]
    fn date_styles() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(cal.date(FormatStyle::Short).as_str(), "Fri, Jan 01 2021");
        assert_eq!(cal.date(FormatStyle::Long).as_str(), "Friday, January 01 2021");
    }

    #[test]
    fn date_time_styles() {
        let cal = at(2021, 4, 1, 8, 34, 20);
        assert_eq!(
            cal.date_time(FormatStyle::Short).as_str(),
            "Thu, Apr 01 2021 08:34:20"
        );
        assert_eq!(
            cal.date_time(FormatStyle::Long).as_str(),
            "Thursday, April 01 2021 08:34:20"
        );
    }

    #[test]
    fn time_date_styles() {
        let cal = at(2021, 4, 1, 8, 34, 20);
        assert_eq!(
            cal.time_date(FormatStyle::Short).as_str(),
            "08:34:20 Thu, Apr 01 2021"
        );
        assert_eq!(
            cal.time_date(FormatStyle::Long).as_str(),
            "08:34:20 Thursday, April 01 2021"
        );
    }

    #[test]
    fn longest_fixed_style_fits() {
        // Wednesday + September is the longest name pair
        let cal = at(2021, 9, 29, 23, 59, 59);
        let text = cal.date_time(FormatStyle::Long);
        assert_eq!(text.as_str(), "Wednesday, September 29 2021 23:59:59");
    }

    #[test]
    fn time_zero_pads() {
        assert_eq!(at(2021, 1, 1, 7, 5, 3).time().as_str(), "07:05:03");
    }

    #[test]
    fn fixed_style_on_impossible_value_is_empty() {
        let mut cal = at(2021, 2, 1, 0, 0, 0);
        cal.day = 30;
        assert!(cal.date(FormatStyle::Short).is_empty());
    }

    // =========================================================================
    // Custom Patterns
    // =========================================================================

    #[test]
    fn custom_pattern() {
        let cal = at(2036, 1, 1, 0, 0, 9);
        let text = cal.format::<MAX_PATTERN_STRING>("%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(text.as_str(), "2036-01-01T00:00:09");
    }

    #[test]
    fn custom_pattern_literal_text() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        let text = cal.format::<MAX_PATTERN_STRING>("day %j of %Y").unwrap();
        assert_eq!(text.as_str(), "day 001 of 2021");
    }

    #[test]
    fn empty_pattern_is_empty() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert!(cal.format::<8>("").unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_rejected() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(
            cal.format::<MAX_PATTERN_STRING>("%Q"),
            Err(FormatError::InvalidPattern)
        );
    }

    #[test]
    fn pattern_too_long_for_buffer() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(cal.format::<4>("%Y-%m-%d"), Err(FormatError::Overflow));
    }

    #[test]
    fn zone_specifiers_render_as_utc() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(cal.format::<16>("%z").unwrap().as_str(), "+0000");
        assert_eq!(cal.format::<16>("%:z").unwrap().as_str(), "+00:00");
    }

    #[test]
    fn zone_specifiers_render_offset() {
        let cal = at(2021, 1, 1, 1, 0, 0);
        assert_eq!(cal.format_at::<16>("%z", 3600).unwrap().as_str(), "+0100");
        assert_eq!(cal.format_at::<16>("%Z", 3600).unwrap().as_str(), "+01:00");
        assert_eq!(cal.format_at::<16>("%z", -19_800).unwrap().as_str(), "-0530");
        assert_eq!(
            cal.format_at::<MAX_PATTERN_STRING>("%Y-%m-%dT%H:%M:%S%:z", 3600)
                .unwrap()
                .as_str(),
            "2021-01-01T01:00:00+01:00"
        );
    }

    #[test]
    fn zone_specifier_with_day_long_offset() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(cal.format_at::<16>("%z", 86_400), Err(FormatError::InvalidOffset));
        // Patterns without a zone do not need the offset
        assert_eq!(cal.format_at::<16>("%H:%M", 86_400).unwrap().as_str(), "00:00");
    }

    #[test]
    fn zone_specifier_does_not_report_overflow() {
        let cal = at(2021, 1, 1, 0, 0, 0);
        assert_ne!(cal.format::<MAX_PATTERN_STRING>("%Z"), Err(FormatError::Overflow));
        assert_eq!(cal.format::<2>("%z"), Err(FormatError::Overflow));
    }

    #[test]
    fn impossible_value_rejected() {
        let mut cal = at(2021, 1, 1, 0, 0, 0);
        cal.hour = 24;
        assert_eq!(cal.format::<16>("%H"), Err(FormatError::InvalidDate));
    }

    // =========================================================================
    // Hour / AM-PM
    // =========================================================================

    #[test]
    fn twelve_hour_mapping() {
        let expected = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        for (hour, want) in expected.iter().enumerate() {
            assert_eq!(twelve_hour(hour as u32), *want, "hour {}", hour);
        }
    }

    #[test]
    fn hour_in_twenty_four() {
        assert_eq!(at(2021, 1, 1, 0, 0, 0).hour_in(HourMode::TwentyFour), 0);
        assert_eq!(at(2021, 1, 1, 23, 0, 0).hour_in(HourMode::TwentyFour), 23);
    }

    #[test]
    fn am_pm_boundaries() {
        assert_eq!(at(2021, 1, 1, 0, 0, 0).am_pm(false), "AM");
        assert_eq!(at(2021, 1, 1, 11, 59, 59).am_pm(false), "AM");
        assert_eq!(at(2021, 1, 1, 12, 0, 0).am_pm(false), "PM");
        assert_eq!(at(2021, 1, 1, 23, 0, 0).am_pm(false), "PM");
    }

    #[test]
    fn am_pm_lowercase() {
        assert_eq!(at(2021, 1, 1, 0, 0, 0).am_pm(true), "am");
        assert_eq!(at(2021, 1, 1, 12, 0, 0).am_pm(true), "pm");
    }

    #[test]
    fn format_error_display() {
        assert_eq!(
            format!("{}", FormatError::Overflow),
            "formatted time exceeds buffer capacity"
        );
    }
}
