//! Integration tests for the wall clock

use rtc_wallclock::{
    calendar::CalendarTime, hal::MockRtc, overflow::CompensatedRtc, FormatStyle, HourMode,
    WallClock, OVERFLOW_THRESHOLD,
};

type MockClock = WallClock<CompensatedRtc<MockRtc>>;

fn clock_with_offset(offset_secs: i32) -> MockClock {
    WallClock::with_offset(MockRtc::new(), offset_secs)
}

/// Sets the clock to 2021-01-01 plus `hour` hours
fn clock_at_hour(hour: u64) -> MockClock {
    let mut clock = clock_with_offset(0);
    clock.set_time(1_609_459_200 + hour * 3600, 0);
    clock
}

#[test]
fn new_year_2021_scenario() {
    let mut clock = clock_with_offset(0);
    clock.set_time_parts(0, 0, 0, 1, 1, 2021, 0);

    assert_eq!(clock.year(), 2021);
    assert_eq!(clock.month(), 0);
    assert_eq!(clock.day(), 1);
    assert_eq!(clock.date(FormatStyle::Short).as_str(), "Fri, Jan 01 2021");
    assert!(!clock.is_overflowed());
}

#[test]
fn ten_seconds_past_threshold_scenario() {
    let mut clock = clock_with_offset(0);
    clock.set_time(OVERFLOW_THRESHOLD + 10, 0);

    assert!(clock.is_overflowed());
    assert_eq!(clock.year(), 2036);
    assert_eq!(
        clock.date_time(FormatStyle::Short).as_str(),
        "Tue, Jan 01 2036 00:00:09"
    );
}

#[test]
fn round_trip_below_threshold() {
    let samples = [
        0,
        1,
        59,
        86_399,
        951_782_400, // 2000-02-29
        1_609_459_200,
        2_000_000_000,
        OVERFLOW_THRESHOLD - 1,
        OVERFLOW_THRESHOLD,
    ];

    let mut clock = clock_with_offset(0);
    for epoch in samples {
        clock.set_time(epoch, 0);
        assert!(!clock.is_overflowed(), "epoch {}", epoch);
        assert_eq!(clock.epoch(), epoch as i64, "epoch {}", epoch);
        assert_eq!(clock.local_epoch(), epoch, "epoch {}", epoch);
    }
}

#[test]
fn overflow_is_transparent_up_to_u32_max() {
    let samples = [
        OVERFLOW_THRESHOLD + 1,
        OVERFLOW_THRESHOLD + 86_400 * 59, // around 2036-02-29
        2_500_000_000,
        3_000_000_000,
        4_102_444_800,          // 2100-01-01
        4_107_542_400,          // 2100-03-01, after the skipped leap day
        u32::MAX as u64 - 1,
        u32::MAX as u64,
    ];

    let mut clock = clock_with_offset(0);
    for epoch in samples {
        clock.set_time(epoch, 0);
        assert!(clock.is_overflowed(), "epoch {}", epoch);

        let got = clock.time_struct();
        let want = CalendarTime::from_epoch(epoch as i64);
        assert_eq!(
            (got.year, got.month, got.day, got.hour, got.minute, got.second),
            (want.year, want.month, want.day, want.hour, want.minute, want.second),
            "epoch {}",
            epoch
        );
        assert_eq!(got, want, "derived fields for epoch {}", epoch);
        assert_eq!(clock.epoch(), epoch as i64);
    }
}

#[test]
fn raw_value_stays_in_range_while_compensating() {
    let mut clock = clock_with_offset(0);
    clock.set_time(u32::MAX as u64, 0);

    let raw = clock.rtc().hardware().last_written().unwrap();
    assert!(raw.secs <= OVERFLOW_THRESHOLD);
}

#[test]
fn offset_shifts_epoch_linearly() {
    let offsets = [i32::MIN / 2, -86_400, -3600, -1, 0, 1, 19_800, 86_400, i32::MAX / 2];
    let bases = [1_609_459_200, OVERFLOW_THRESHOLD, OVERFLOW_THRESHOLD + 10, 3_000_000_000];

    for base in bases {
        let mut reference = clock_with_offset(0);
        reference.set_time(base, 0);
        let base_epoch = reference.epoch();

        for offset in offsets {
            let mut clock = clock_with_offset(offset);
            clock.set_time(base, 0);
            assert_eq!(
                clock.epoch(),
                base_epoch + i64::from(offset),
                "base {} offset {}",
                base,
                offset
            );
        }
    }
}

#[test]
fn offset_applies_after_overflow_compensation() {
    // 2035-12-31 23:00:00 UTC read at UTC+2 is already 2036
    let mut clock = clock_with_offset(7200);
    clock.set_time(OVERFLOW_THRESHOLD - 3599, 0);

    assert!(!clock.is_overflowed());
    assert_eq!(clock.year(), 2036);
    assert_eq!(clock.hour(HourMode::TwentyFour), 1);

    // And a shifted value read at UTC-2 is still 2035
    let mut clock = clock_with_offset(-7200);
    clock.set_time(OVERFLOW_THRESHOLD + 1, 0);

    assert!(clock.is_overflowed());
    assert_eq!(clock.year(), 2035);
    assert_eq!(clock.hour(HourMode::TwentyFour), 22);
}

#[test]
fn am_pm_boundaries() {
    assert_eq!(clock_at_hour(0).am_pm(false), "AM");
    assert_eq!(clock_at_hour(11).am_pm(false), "AM");
    assert_eq!(clock_at_hour(12).am_pm(false), "PM");
    assert_eq!(clock_at_hour(23).am_pm(false), "PM");

    assert_eq!(clock_at_hour(0).am_pm(true), "am");
    assert_eq!(clock_at_hour(23).am_pm(true), "pm");
}

#[test]
fn twelve_hour_mode() {
    assert_eq!(clock_at_hour(0).hour(HourMode::Twelve), 12);
    assert_eq!(clock_at_hour(12).hour(HourMode::Twelve), 12);
    assert_eq!(clock_at_hour(13).hour(HourMode::Twelve), 1);
    assert_eq!(clock_at_hour(23).hour(HourMode::Twelve), 11);
}

#[test]
fn twenty_four_hour_mode() {
    assert_eq!(clock_at_hour(0).hour(HourMode::TwentyFour), 0);
    assert_eq!(clock_at_hour(13).hour(HourMode::TwentyFour), 13);
}

#[test]
fn getters_agree_with_time_struct() {
    let mut clock = clock_with_offset(0);
    clock.set_time_parts(45, 30, 17, 29, 2, 2024, 0);

    let cal = clock.time_struct();
    assert_eq!(clock.second(), cal.second);
    assert_eq!(clock.minute(), cal.minute);
    assert_eq!(clock.hour(HourMode::TwentyFour), cal.hour);
    assert_eq!(clock.day(), 29);
    assert_eq!(clock.month(), 1);
    assert_eq!(clock.year(), 2024);
    assert_eq!(clock.day_of_week(), 4); // Thursday
    assert_eq!(clock.day_of_year(), 59);
}

#[test]
fn string_getters() {
    let mut clock = clock_with_offset(0);
    clock.set_time_parts(20, 34, 8, 1, 4, 2021, 0);

    assert_eq!(clock.time().as_str(), "08:34:20");
    assert_eq!(clock.date(FormatStyle::Long).as_str(), "Thursday, April 01 2021");
    assert_eq!(
        clock.date_time(FormatStyle::Long).as_str(),
        "Thursday, April 01 2021 08:34:20"
    );
    assert_eq!(
        clock.time_date(FormatStyle::Short).as_str(),
        "08:34:20 Thu, Apr 01 2021"
    );
    assert_eq!(
        clock.format("%B %-d, %Y at %I:%M %p").unwrap().as_str(),
        "April 1, 2021 at 08:34 AM"
    );
}

#[test]
fn hardware_ticks_are_visible() {
    let mut clock = clock_with_offset(0);
    clock.set_time(OVERFLOW_THRESHOLD - 1, 0);
    assert_eq!(clock.year(), 2035);

    // The hardware keeps counting; the unshifted value runs past the
    // boundary until the next set re-applies compensation
    clock.rtc_mut().hardware_mut().advance_secs(2);
    assert!(!clock.is_overflowed());
    assert_eq!(clock.local_epoch(), OVERFLOW_THRESHOLD + 1);
    assert_eq!(clock.year(), 2036);

    let now = clock.local_epoch();
    clock.set_time(now, 0);
    assert!(clock.is_overflowed());
    assert_eq!(clock.local_epoch(), now);
    assert_eq!(clock.rtc().hardware().last_written().unwrap().secs, 1);
}

#[test]
fn sub_second_reads() {
    let mut clock = clock_with_offset(3600);
    clock.set_time(OVERFLOW_THRESHOLD + 10, 750_250);

    assert_eq!(clock.micros(), 750_250);
    assert_eq!(clock.millis(), 750);
}
