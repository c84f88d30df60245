//! Log-backed display adapter.
//!
//! Implements [`DisplayPort`] by composing the two 16-column lines an LCD1602
//! would show and writing them to the logger. The last frame is kept so the
//! main loop (and tests) can inspect what is on screen. A character-LCD
//! adapter would implement the same trait and push the identical lines over
//! I²C.

use core::fmt::Write;

use log::info;

use crate::app::clock::{ClockDate, ClockTime};
use crate::app::ports::{AlarmIndicator, DisplayLayout, DisplayPort};
use crate::app::service::{LCD_COLUMNS, Line};

pub struct LogDisplay {
    layout: DisplayLayout,
    frame: (Line, Line),
}

impl Default for LogDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDisplay {
    pub fn new() -> Self {
        Self {
            layout: DisplayLayout::AlarmFocus,
            frame: (Line::new(), Line::new()),
        }
    }

    pub fn layout(&self) -> DisplayLayout {
        self.layout
    }

    /// The most recently drawn lines, padded to the display width.
    pub fn frame(&self) -> (&str, &str) {
        (self.frame.0.as_str(), self.frame.1.as_str())
    }

    fn draw(&mut self, line1: &str, line2: &str) {
        self.frame = (padded(line1), padded(line2));
        info!("LCD |{}|{}|", self.frame.0, self.frame.1);
    }
}

impl DisplayPort for LogDisplay {
    fn set_layout(&mut self, layout: DisplayLayout) {
        self.layout = layout;
    }

    fn show_clock(&mut self, time: ClockTime, date: ClockDate, alarm: AlarmIndicator) {
        let mut l1 = Line::new();
        let mut l2 = Line::new();
        let bell = match (alarm.enabled, alarm.ringing) {
            (_, true) => "!!",
            (true, false) => "*",
            (false, false) => "",
        };

        let _ = match self.layout {
            DisplayLayout::TimeOnly => write!(l1, "{time}"),
            DisplayLayout::DateOnly => write!(l1, "{date}"),
            DisplayLayout::TimeDate => write!(l1, "{time}").and(write!(l2, "{date}")),
            DisplayLayout::TimeWeekday => {
                write!(l1, "{time}").and(write!(l2, "{}", date.weekday_name()))
            }
            DisplayLayout::Full => write!(l1, "{time} {bell}")
                .and(write!(l2, "{date} {}", date.weekday_name())),
            DisplayLayout::AlarmFocus => {
                let status = match (alarm.enabled, alarm.ringing) {
                    (_, true) => "ALARM!",
                    (true, false) => "Alarm ON",
                    (false, false) => "Alarm OFF",
                };
                write!(l1, "{time} {bell}").and(write!(l2, "{status}"))
            }
        };
        self.draw(&l1, &l2);
    }

    fn show_lines(&mut self, line1: &str, line2: &str) {
        self.draw(line1, line2);
    }
}

/// Truncate or space-pad to exactly [`LCD_COLUMNS`] characters.
fn padded(text: &str) -> Line {
    let mut line = Line::new();
    for c in text.chars().take(LCD_COLUMNS) {
        if line.push(c).is_err() {
            break;
        }
    }
    while line.len() < LCD_COLUMNS {
        let _ = line.push(' ');
    }
    line
}
