//! AlarmClock firmware entry point.
//!
//! Single-button alarm clock: the GPIO interrupt feeds the gesture
//! classifier, the poll loop resolves gestures and drives the clock service.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SoftRtc        LogDisplay      LogEventSink    MonotonicTime  │
//! │  (ClockPort)    (DisplayPort)   (EventSink)     (timebase)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │             ClockService (pure logic)                  │    │
//! │  │  Menu · Alarm · Layout                                 │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  GPIO ISR ──▶ BUTTON (SharedClassifier) ◀── poll loop          │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::{error, info};

use alarmclock::adapters::log_display::LogDisplay;
use alarmclock::adapters::log_sink::LogEventSink;
use alarmclock::adapters::soft_rtc::SoftRtc;
use alarmclock::adapters::time::MonotonicTime;
use alarmclock::app::ports::DisplayPort;
use alarmclock::app::service::ClockService;
use alarmclock::config::{MAX_LOG_LEVEL, SystemConfig};
use alarmclock::drivers::button::{BUTTON, EspButtonInput};
use alarmclock::drivers::hw_init;
use alarmclock::gesture::GestureClassifier;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    log::set_max_level(MAX_LOG_LEVEL);

    info!("╔══════════════════════════════════════╗");
    info!("║  AlarmClock v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    let poll_ms = config.button.poll_period_ms;

    // ── 3. Button: classifier first, then the interrupt ───────
    BUTTON.install(GestureClassifier::new(config.button, EspButtonInput));
    hw_init::init_button()?;
    if let Err(e) = hw_init::init_isr_service() {
        // Polling alone still classifies gestures, only with poll latency.
        error!("ISR service init failed: {}, continuing on polling only", e);
    }

    // ── 4. Adapters + service ─────────────────────────────────
    let time = MonotonicTime::new();
    let mut rtc = SoftRtc::new(time.uptime_ms());
    let mut display = LogDisplay::new();
    let mut sink = LogEventSink::new();
    let mut service = ClockService::new(config.clone());

    display.show_lines("Alarm Clock", "v1.0 Ready");
    FreeRtos::delay_ms(config.startup_banner_ms);
    service.start(&mut display, &mut sink);

    info!("System ready. Entering poll loop ({} ms).", poll_ms);

    // ── 5. Poll loop ──────────────────────────────────────────
    loop {
        let now_ms = time.uptime_ms();

        BUTTON.advance(now_ms);
        if let Some(gesture) = BUTTON.take_pending_gesture() {
            service.handle_gesture(gesture, &mut display, &mut sink);
        }

        rtc.sync(now_ms);
        service.tick(now_ms, &mut rtc, &mut display, &mut sink);

        FreeRtos::delay_ms(poll_ms);
    }
}
