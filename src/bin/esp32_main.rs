//! ESP32 wall clock demo.
//!
//! This is the entry point for running the clock on real hardware.
//! It:
//! - Restores the overflow flag retained across deep sleep
//! - Sets an initial time on cold boot (compile-time `RTC_INITIAL_EPOCH`,
//!   defaulting to 2021-01-01)
//! - Prints the local date and time once per second
//!
//! # Build
//!
//! ```bash
//! # UTC+1, starting just before the 2035 boundary
//! RTC_OFFSET_SECS=3600 RTC_INITIAL_EPOCH=2082758390 \
//!     cargo build --release --features esp32 --bin esp32_main
//!
//! # Flash and monitor
//! espflash flash --monitor target/riscv32imc-esp-espidf/release/esp32_main
//! ```

use rtc_wallclock::hal::esp32::{retained, Esp32Rtc};
use rtc_wallclock::{
    ClockConfig, CompensatedRtc, FormatStyle, HourMode, WallClock, DEFAULT_EPOCH,
};
use std::thread;
use std::time::Duration;

/// Main loop interval in milliseconds (1Hz)
const LOOP_INTERVAL_MS: u64 = 1000;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    println!();
    println!("================================");
    println!("  rtc-wallclock ESP32 demo");
    println!("================================");
    println!();

    // =========================================================================
    // Configuration
    // =========================================================================
    let offset_secs: i32 = match option_env!("RTC_OFFSET_SECS") {
        Some(raw) => raw.parse()?,
        None => 0,
    };
    let initial_epoch: u64 = match option_env!("RTC_INITIAL_EPOCH") {
        Some(raw) => raw.parse()?,
        None => DEFAULT_EPOCH,
    };
    let config = ClockConfig::default()
        .with_name("esp32")
        .with_offset_secs(offset_secs);

    // =========================================================================
    // Initialize Clock
    // =========================================================================
    let rtc = CompensatedRtc::with_overflow(Esp32Rtc::new(), retained::overflow());
    let mut clock = WallClock::from_access(rtc, config.offset_secs);

    // A fresh RTC counts up from 1970
    if clock.local_epoch() < DEFAULT_EPOCH {
        clock.set_time(initial_epoch, 0);
        retained::save_overflow(clock.is_overflowed());
        println!("[OK] Cold boot, time set to epoch {}", initial_epoch);
    } else {
        println!("[OK] RTC retained time across reset");
    }
    println!(
        "[OK] Offset {}s, overflow compensation {}",
        clock.offset_secs(),
        if clock.is_overflowed() { "active" } else { "idle" }
    );
    println!();

    // =========================================================================
    // Main Loop (1Hz)
    // =========================================================================
    loop {
        let now = clock.time_struct();
        println!(
            "{}  ({:02}:{:02} {})  epoch={} overflow={}",
            now.date_time(FormatStyle::Long),
            now.hour_in(HourMode::Twelve),
            now.minute,
            now.am_pm(false),
            clock.local_epoch(),
            clock.is_overflowed()
        );

        // Sleep until next tick
        thread::sleep(Duration::from_millis(LOOP_INTERVAL_MS));
    }
}
