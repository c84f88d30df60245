//! Application service, the hexagonal core.
//!
//! [`ClockService`] owns the menu controller, alarm flags, and display
//! bookkeeping. It consumes one classified [`Gesture`] at a time and is
//! ticked from the main loop; all I/O flows through port traits injected
//! at call sites.
//!
//! ```text
//!  Gesture ──▶ ┌──────────────────────────┐ ──▶ DisplayPort
//!              │       ClockService       │
//! ClockPort ──▶│  Menu · Alarm · Layout   │ ──▶ EventSink
//!              └──────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use log::info;

use crate::config::SystemConfig;
use crate::gesture::Gesture;

use super::events::AppEvent;
use super::menu::{MenuController, MenuItem, Mode};
use super::ports::{AlarmIndicator, ClockPort, DisplayLayout, DisplayPort, EventSink};

/// Characters per LCD line.
pub const LCD_COLUMNS: usize = 16;

/// One line of display text.
pub type Line = String<LCD_COLUMNS>;

pub struct ClockService {
    config: SystemConfig,
    menu: MenuController,
    alarm_enabled: bool,
    alarm_ringing: bool,
    /// Set when the alarm fires; cleared once the clock leaves the alarm minute.
    alarm_latched: bool,
    layout: DisplayLayout,
    blink_on: bool,
    last_blink_ms: u32,
    dirty: bool,
}

impl ClockService {
    /// Does **not** touch the display; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            alarm_enabled: config.alarm_enabled,
            config,
            menu: MenuController::new(),
            alarm_ringing: false,
            alarm_latched: false,
            layout: DisplayLayout::AlarmFocus,
            blink_on: true,
            last_blink_ms: 0,
            dirty: true,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        display.set_layout(self.layout);
        self.dirty = true;
        sink.emit(&AppEvent::Started(self.menu.mode()));
        info!("ClockService started in {:?}", self.menu.mode());
    }

    // ── Input ─────────────────────────────────────────────────

    /// Apply one gesture taken from the classifier.
    pub fn handle_gesture(
        &mut self,
        gesture: Gesture,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::Gesture(gesture));
        self.dirty = true;

        // A ringing alarm swallows the double click that silences it.
        if self.alarm_ringing && gesture == Gesture::DoubleClick {
            self.alarm_ringing = false;
            sink.emit(&AppEvent::AlarmDismissed);
            info!("Alarm dismissed");
            return;
        }

        let prev = self.menu.mode();
        self.menu.handle(gesture);
        let mode = self.menu.mode();
        if mode != prev {
            sink.emit(&AppEvent::ModeChanged { from: prev, to: mode });
            info!("Mode: {:?} -> {:?}", prev, mode);
        }

        match (prev, gesture) {
            (Mode::Standard, Gesture::DoubleClick) => self.toggle_alarm(sink),
            (Mode::Standard, Gesture::LongPress) => {
                self.layout = self.layout.next();
                display.set_layout(self.layout);
                sink.emit(&AppEvent::LayoutChanged(self.layout));
            }
            (Mode::Edit, Gesture::ShortPress) if self.menu.selected() == MenuItem::AlarmOnOff => {
                self.toggle_alarm(sink);
            }
            _ => {}
        }
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Blink, alarm check, and redraw. Call once per main-loop iteration.
    pub fn tick(
        &mut self,
        now_ms: u32,
        clock: &mut impl ClockPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) {
        if self.menu.mode() == Mode::Edit {
            if now_ms.wrapping_sub(self.last_blink_ms) >= self.config.blink_period_ms {
                self.blink_on = !self.blink_on;
                self.last_blink_ms = now_ms;
                self.dirty = true;
            }
        } else {
            self.blink_on = true;
            self.last_blink_ms = now_ms;
        }

        if clock.take_tick() && self.menu.mode() == Mode::Standard {
            self.dirty = true;
        }

        self.check_alarm(&*clock, sink);

        if self.dirty {
            self.render(&*clock, display);
            self.dirty = false;
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.menu.mode()
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn alarm_enabled(&self) -> bool {
        self.alarm_enabled
    }

    pub fn alarm_ringing(&self) -> bool {
        self.alarm_ringing
    }

    pub fn layout(&self) -> DisplayLayout {
        self.layout
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// The two lines the menu / edit screens would show right now.
    /// `None` in the standard view, which is drawn by the display adapter.
    pub fn text_lines(&self) -> Option<(Line, Line)> {
        let mut line1 = Line::new();
        let mut line2 = Line::new();
        let item = self.menu.selected();

        // Lines never exceed LCD_COLUMNS, so the writes cannot fail.
        match self.menu.mode() {
            Mode::Standard => return None,
            Mode::Menu => {
                let _ = line1.push_str("Menu");
                let _ = write!(line2, ">{}", item.menu_label());
            }
            Mode::Edit => {
                let _ = write!(line1, "Edit {}", item.edit_label());
                let (open, close) = if self.blink_on { ('[', ']') } else { (' ', ' ') };
                if item == MenuItem::AlarmOnOff {
                    let state = if self.alarm_enabled { "ON " } else { "OFF" };
                    let _ = write!(line2, "{open}{state}{close}");
                } else {
                    let _ = write!(line2, "{open}{:02}{close}", self.menu.edit_value());
                }
            }
        }
        Some((line1, line2))
    }

    // ── Internal ──────────────────────────────────────────────

    fn toggle_alarm(&mut self, sink: &mut impl EventSink) {
        self.alarm_enabled = !self.alarm_enabled;
        sink.emit(&AppEvent::AlarmToggled(self.alarm_enabled));
        info!("Alarm {}", if self.alarm_enabled { "armed" } else { "disarmed" });
    }

    fn check_alarm(&mut self, clock: &impl ClockPort, sink: &mut impl EventSink) {
        let now = clock.time();
        let alarm = self.config.alarm;
        let in_alarm_minute = now.hours() == alarm.hours && now.minutes() == alarm.minutes;

        if !in_alarm_minute {
            self.alarm_latched = false;
            return;
        }
        if self.alarm_enabled && !self.alarm_ringing && !self.alarm_latched && now.seconds() == 0 {
            self.alarm_ringing = true;
            self.alarm_latched = true;
            self.dirty = true;
            sink.emit(&AppEvent::AlarmTriggered);
            info!("Alarm triggered at {}", now);
        }
    }

    fn render(&self, clock: &impl ClockPort, display: &mut impl DisplayPort) {
        match self.text_lines() {
            Some((line1, line2)) => display.show_lines(&line1, &line2),
            None => display.show_clock(
                clock.time(),
                clock.date(),
                AlarmIndicator {
                    enabled: self.alarm_enabled,
                    ringing: self.alarm_ringing,
                },
            ),
        }
    }
}
