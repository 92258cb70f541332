//! Desktop demo of the wall clock and its 2035 overflow handling.
//!
//! Runs a [`SystemRtc`] (which follows the host's monotonic clock) through
//! the overflow boundary and prints what several offset views of the same
//! RTC report on each side of it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example desktop_clock
//! ```
//!
//! # Configuration
//!
//! Edit the `ClockConfig` values in `main()` to try other offsets.

use std::thread;
use std::time::Duration;

use rtc_wallclock::hal::SystemRtc;
use rtc_wallclock::{
    ClockConfig, FormatStyle, HourMode, RtcAccess, SharedRtc, WallClock, OVERFLOW_THRESHOLD,
};

fn print_views<A: RtcAccess>(views: &[(&str, &WallClock<A>)]) -> anyhow::Result<()> {
    for (name, clock) in views {
        println!(
            "  {:<6} {}  {:>2}{}  iso={}",
            name,
            clock.date_time(FormatStyle::Short),
            clock.hour(HourMode::Twelve),
            clock.am_pm(true),
            clock.format("%Y-%m-%dT%H:%M:%S")?,
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    println!("=================================");
    println!("  rtc-wallclock Desktop Demo");
    println!("=================================");
    println!();

    // Central configuration - modify this for your setup
    let utc = ClockConfig::default().with_name("utc");
    let berlin = ClockConfig::default().with_name("berlin").with_offset_hours(1);
    let ny = ClockConfig::default().with_name("ny").with_offset_hours(-5);

    let rtc = SharedRtc::new(SystemRtc::new());
    let mut utc_clock = rtc.clock(utc.offset_secs);
    let berlin_clock = rtc.clock(berlin.offset_secs);
    let ny_clock = rtc.clock(ny.offset_secs);

    // Three seconds before the RTC runs out of range
    utc_clock.set_time(OVERFLOW_THRESHOLD - 3, 0);

    for _ in 0..6 {
        println!(
            "epoch={} overflow={}",
            utc_clock.local_epoch(),
            utc_clock.is_overflowed()
        );
        print_views(&[
            (utc.name.as_str(), &utc_clock),
            (berlin.name.as_str(), &berlin_clock),
            (ny.name.as_str(), &ny_clock),
        ])?;
        println!();

        thread::sleep(Duration::from_secs(1));

        // Re-set once the hardware has ticked past the boundary, the way
        // a time sync would, so the shifted representation kicks in
        let now = utc_clock.local_epoch();
        if now > OVERFLOW_THRESHOLD && !utc_clock.is_overflowed() {
            println!(">> crossed 2035-12-31 23:59:59, re-syncing with compensation");
            utc_clock.set_time(now, utc_clock.micros());
        }
    }

    Ok(())
}
