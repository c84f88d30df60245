//! Mock adapters for integration tests.
//!
//! Records every display call and emitted event so tests can assert on the
//! full history without a real RTC or LCD.

use std::cell::Cell;
use std::rc::Rc;

use alarmclock::app::clock::{ClockDate, ClockTime};
use alarmclock::app::events::AppEvent;
use alarmclock::app::ports::{AlarmIndicator, ClockPort, DisplayLayout, DisplayPort, EventSink};
use alarmclock::error::Result;
use alarmclock::gesture::RawInput;

// ── MockClock ─────────────────────────────────────────────────

pub struct MockClock {
    pub time: ClockTime,
    pub date: ClockDate,
    pub tick: bool,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            time: ClockTime::new(hours, minutes, seconds).expect("valid test time"),
            date: ClockDate::default(),
            tick: false,
        }
    }

    /// Jump to a new time and raise the tick flag like a real RTC second.
    pub fn set(&mut self, hours: u8, minutes: u8, seconds: u8) {
        self.time = ClockTime::new(hours, minutes, seconds).expect("valid test time");
        self.tick = true;
    }
}

impl ClockPort for MockClock {
    fn time(&self) -> ClockTime {
        self.time
    }

    fn date(&self) -> ClockDate {
        self.date
    }

    fn set_time(&mut self, time: ClockTime) -> Result<()> {
        self.time = time;
        Ok(())
    }

    fn set_date(&mut self, date: ClockDate) -> Result<()> {
        self.date = date;
        Ok(())
    }

    fn take_tick(&mut self) -> bool {
        std::mem::take(&mut self.tick)
    }
}

// ── MockDisplay ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    SetLayout(DisplayLayout),
    Clock { time: ClockTime, alarm: AlarmIndicator },
    Lines(String, String),
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_lines(&self) -> Option<(&str, &str)> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Lines(a, b) => Some((a.as_str(), b.as_str())),
            _ => None,
        })
    }

    pub fn clock_frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Clock { .. }))
            .count()
    }

    pub fn layouts(&self) -> Vec<DisplayLayout> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::SetLayout(l) => Some(*l),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for MockDisplay {
    fn set_layout(&mut self, layout: DisplayLayout) {
        self.calls.push(DisplayCall::SetLayout(layout));
    }

    fn show_clock(&mut self, time: ClockTime, _date: ClockDate, alarm: AlarmIndicator) {
        self.calls.push(DisplayCall::Clock { time, alarm });
    }

    fn show_lines(&mut self, line1: &str, line2: &str) {
        self.calls
            .push(DisplayCall::Lines(line1.to_owned(), line2.to_owned()));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: AppEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── MockButton ────────────────────────────────────────────────

/// Contact level shared between the test and the classifier.
#[derive(Clone, Default)]
pub struct MockButton(pub Rc<Cell<bool>>);

#[allow(dead_code)]
impl MockButton {
    pub fn set(&self, pressed: bool) {
        self.0.set(pressed);
    }
}

impl RawInput for MockButton {
    fn is_pressed_raw(&mut self) -> bool {
        self.0.get()
    }
}
