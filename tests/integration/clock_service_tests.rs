//! Integration tests for the gesture → ClockService → display/event pipeline.
//!
//! These run on the host (x86_64) and drive the service with classified
//! gestures and a mock RTC, asserting on everything it draws and emits.

use crate::mock_hw::{DisplayCall, MockClock, MockDisplay, RecordingSink};

use alarmclock::app::events::AppEvent;
use alarmclock::app::menu::{MenuItem, Mode};
use alarmclock::app::ports::DisplayLayout;
use alarmclock::app::service::ClockService;
use alarmclock::config::SystemConfig;
use alarmclock::gesture::Gesture;

struct Rig {
    service: ClockService,
    clock: MockClock,
    display: MockDisplay,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        let mut rig = Self {
            service: ClockService::new(SystemConfig::default()),
            clock: MockClock::at(12, 0, 0),
            display: MockDisplay::new(),
            sink: RecordingSink::new(),
        };
        rig.service.start(&mut rig.display, &mut rig.sink);
        rig
    }

    fn gesture(&mut self, g: Gesture) {
        self.service
            .handle_gesture(g, &mut self.display, &mut self.sink);
    }

    fn tick(&mut self, now_ms: u32) {
        self.service
            .tick(now_ms, &mut self.clock, &mut self.display, &mut self.sink);
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_announces_mode_and_layout() {
    let mut rig = Rig::new();
    assert_eq!(rig.sink.events, vec![AppEvent::Started(Mode::Standard)]);
    assert_eq!(rig.display.layouts(), vec![DisplayLayout::AlarmFocus]);

    rig.tick(0);
    assert_eq!(rig.display.clock_frames(), 1, "first tick draws the clock face");
}

// ── Alarm ─────────────────────────────────────────────────────

#[test]
fn alarm_rings_once_and_double_click_dismisses() {
    let mut rig = Rig::new();
    rig.clock.set(7, 29, 59);
    rig.tick(0);
    assert!(!rig.service.alarm_ringing());

    rig.clock.set(7, 30, 0);
    rig.tick(1000);
    assert!(rig.service.alarm_ringing());
    rig.tick(1010);
    assert_eq!(rig.sink.count(AppEvent::AlarmTriggered), 1);

    match rig.display.calls.last() {
        Some(DisplayCall::Clock { alarm, .. }) => assert!(alarm.ringing),
        other => panic!("expected clock frame, got {:?}", other),
    }

    rig.gesture(Gesture::DoubleClick);
    assert!(!rig.service.alarm_ringing());
    assert!(rig.service.alarm_enabled(), "dismiss must not disarm");
    assert_eq!(rig.sink.count(AppEvent::AlarmDismissed), 1);
    assert_eq!(rig.sink.count(AppEvent::AlarmToggled(false)), 0);

    // Still inside the alarm minute: no second ring.
    rig.tick(1020);
    assert_eq!(rig.sink.count(AppEvent::AlarmTriggered), 1);

    // Next day, same time.
    rig.clock.set(7, 31, 0);
    rig.tick(2000);
    rig.clock.set(7, 30, 0);
    rig.tick(3000);
    assert_eq!(rig.sink.count(AppEvent::AlarmTriggered), 2);
}

#[test]
fn alarm_only_fires_at_second_zero() {
    let mut rig = Rig::new();
    rig.clock.set(7, 30, 1);
    rig.tick(0);
    assert!(!rig.service.alarm_ringing());
}

#[test]
fn disarmed_alarm_stays_silent() {
    let mut rig = Rig::new();
    rig.gesture(Gesture::DoubleClick);
    assert!(!rig.service.alarm_enabled());
    assert_eq!(rig.sink.count(AppEvent::AlarmToggled(false)), 1);

    rig.clock.set(7, 30, 0);
    rig.tick(0);
    assert!(!rig.service.alarm_ringing());
    assert_eq!(rig.sink.count(AppEvent::AlarmTriggered), 0);
}

// ── Layout ────────────────────────────────────────────────────

#[test]
fn long_press_cycles_every_layout() {
    let mut rig = Rig::new();
    for _ in 0..DisplayLayout::CYCLE.len() {
        rig.gesture(Gesture::LongPress);
    }
    assert_eq!(rig.service.mode(), Mode::Standard);
    assert_eq!(
        rig.display.layouts(),
        vec![
            DisplayLayout::AlarmFocus,
            DisplayLayout::Full,
            DisplayLayout::TimeDate,
            DisplayLayout::TimeOnly,
            DisplayLayout::DateOnly,
            DisplayLayout::TimeWeekday,
            DisplayLayout::AlarmFocus,
        ]
    );
    assert_eq!(rig.service.layout(), DisplayLayout::AlarmFocus);
}

// ── Menu / edit ───────────────────────────────────────────────

#[test]
fn menu_walk_toggles_alarm_from_edit_screen() {
    let mut rig = Rig::new();
    rig.tick(0);

    rig.gesture(Gesture::ShortPress);
    rig.tick(10);
    assert_eq!(rig.display.last_lines(), Some(("Menu", ">Set Time")));

    for _ in 0..3 {
        rig.gesture(Gesture::ShortPress);
    }
    assert_eq!(rig.service.menu().selected(), MenuItem::AlarmOnOff);
    rig.tick(20);
    assert_eq!(rig.display.last_lines(), Some(("Menu", ">Alarm On/Off")));

    rig.gesture(Gesture::LongPress);
    rig.tick(30);
    assert_eq!(rig.display.last_lines(), Some(("Edit Alarm State", "[ON ]")));

    rig.gesture(Gesture::ShortPress);
    rig.tick(40);
    assert_eq!(rig.display.last_lines(), Some(("Edit Alarm State", "[OFF]")));

    // Backing out never touches the alarm.
    rig.gesture(Gesture::DoubleClick);
    rig.gesture(Gesture::DoubleClick);
    assert_eq!(rig.service.mode(), Mode::Standard);
    assert!(!rig.service.alarm_enabled());
    assert_eq!(rig.sink.count(AppEvent::AlarmToggled(false)), 1);
    assert_eq!(rig.sink.count(AppEvent::AlarmToggled(true)), 0);

    let modes: Vec<(Mode, Mode)> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::ModeChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        modes,
        vec![
            (Mode::Standard, Mode::Menu),
            (Mode::Menu, Mode::Edit),
            (Mode::Edit, Mode::Menu),
            (Mode::Menu, Mode::Standard),
        ]
    );
}

#[test]
fn every_gesture_is_reported() {
    let mut rig = Rig::new();
    rig.gesture(Gesture::ShortPress);
    rig.gesture(Gesture::LongPress);
    assert_eq!(rig.sink.events[1], AppEvent::Gesture(Gesture::ShortPress));
    assert_eq!(rig.sink.count(AppEvent::Gesture(Gesture::LongPress)), 1);
}

#[test]
fn edit_value_blinks_every_half_second() {
    let mut rig = Rig::new();
    rig.tick(0);
    rig.gesture(Gesture::ShortPress);
    rig.gesture(Gesture::LongPress);

    rig.tick(100);
    assert_eq!(rig.display.last_lines(), Some(("Edit Time", "[00]")));

    let drawn = rig.display.calls.len();
    rig.tick(499);
    assert_eq!(rig.display.calls.len(), drawn, "nothing changed, nothing drawn");

    rig.tick(500);
    assert_eq!(rig.display.last_lines(), Some(("Edit Time", " 00 ")));
    rig.tick(1000);
    assert_eq!(rig.display.last_lines(), Some(("Edit Time", "[00]")));

    rig.gesture(Gesture::LongPress);
    rig.tick(1010);
    assert_eq!(rig.display.last_lines(), Some(("Edit Time", "[99]")));
}

#[test]
fn rtc_ticks_redraw_only_the_clock_face() {
    let mut rig = Rig::new();
    rig.tick(0);
    rig.tick(10);
    assert_eq!(rig.display.clock_frames(), 1);

    rig.clock.set(12, 0, 1);
    rig.tick(20);
    assert_eq!(rig.display.clock_frames(), 2);

    rig.gesture(Gesture::ShortPress);
    rig.tick(30);
    let drawn = rig.display.calls.len();
    rig.clock.set(12, 0, 2);
    rig.tick(40);
    assert_eq!(rig.display.calls.len(), drawn, "menu screen ignores RTC ticks");
}
