//! Fuzz target: `GestureClassifier` + `ClockService`
//!
//! Each input byte is one step: a level change with its interrupt, a bare
//! spurious interrupt, or a poll after a time jump (including jumps across
//! the `u32` wrap). Asserts that nothing panics, the click counter stays in
//! range, and every classified gesture is accepted by the service.
//!
//! cargo fuzz run fuzz_classifier

#![no_main]

use libfuzzer_sys::fuzz_target;

use alarmclock::app::clock::{ClockDate, ClockTime};
use alarmclock::app::events::AppEvent;
use alarmclock::app::ports::{AlarmIndicator, DisplayLayout, DisplayPort, EventSink};
use alarmclock::app::service::ClockService;
use alarmclock::adapters::soft_rtc::SoftRtc;
use alarmclock::config::SystemConfig;
use alarmclock::gesture::{ClassifierState, GestureClassifier, RawInput};

struct Level(bool);

impl RawInput for Level {
    fn is_pressed_raw(&mut self) -> bool {
        self.0
    }
}

struct Null;

impl DisplayPort for Null {
    fn set_layout(&mut self, _: DisplayLayout) {}
    fn show_clock(&mut self, _: ClockTime, _: ClockDate, _: AlarmIndicator) {}
    fn show_lines(&mut self, line1: &str, line2: &str) {
        assert!(line1.chars().count() <= 16 && line2.chars().count() <= 16);
    }
}

impl EventSink for Null {
    fn emit(&mut self, _: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = SystemConfig::default();
    let mut service = ClockService::new(config.clone());
    let mut rtc = SoftRtc::new(0);
    let mut now: u32 = data.first().map_or(0, |b| u32::MAX - u32::from(*b) * 100);

    let mut classifier = GestureClassifier::new(config.button, Level(false));
    service.start(&mut Null, &mut Null);

    for &byte in data {
        match byte >> 6 {
            0 => {
                let pressed = byte & 1 == 1;
                classifier.input_mut().0 = pressed;
                classifier.on_interrupt(now);
            }
            1 => classifier.on_interrupt(now),
            _ => {
                now = now.wrapping_add(u32::from(byte & 0x3f) * 10);
                classifier.advance(now);
                if let Some(g) = classifier.take_pending_gesture() {
                    service.handle_gesture(g, &mut Null, &mut Null);
                }
                rtc.sync(now);
                service.tick(now, &mut rtc, &mut Null, &mut Null);
            }
        }

        assert!(classifier.click_count() <= 1);
        if classifier.state() == ClassifierState::Idle {
            assert!(!classifier.is_pressed());
        }
    }
});
