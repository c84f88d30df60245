//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ClockService (domain)
//! ```
//!
//! The RTC peripheral and the character LCD sit behind these traits. The
//! [`ClockService`](super::service::ClockService) consumes them via
//! generics, so the domain core never touches hardware directly.

use super::clock::{ClockDate, ClockTime};
use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Real-time clock.
pub trait ClockPort {
    fn time(&self) -> ClockTime;

    fn date(&self) -> ClockDate;

    fn set_time(&mut self, time: ClockTime) -> Result<()>;

    fn set_date(&mut self, date: ClockDate) -> Result<()>;

    /// `true` once per periodic RTC tick; reading clears the flag.
    fn take_tick(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → LCD)
// ───────────────────────────────────────────────────────────────

/// Arrangement of the clock face on the two-line display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLayout {
    /// Line 1: time only.
    TimeOnly,
    /// Line 1: date only.
    DateOnly,
    /// Line 1: time, line 2: date.
    TimeDate,
    /// Line 1: time, line 2: weekday.
    TimeWeekday,
    /// Line 1: time + icon, line 2: date + weekday.
    Full,
    /// Line 1: time + bell, line 2: alarm status.
    AlarmFocus,
}

impl DisplayLayout {
    /// Order in which a long press in the standard view cycles layouts.
    pub const CYCLE: [Self; 6] = [
        Self::AlarmFocus,
        Self::Full,
        Self::TimeDate,
        Self::TimeOnly,
        Self::DateOnly,
        Self::TimeWeekday,
    ];

    pub fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|&l| l == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }
}

/// Alarm state shown alongside the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmIndicator {
    pub enabled: bool,
    pub ringing: bool,
}

/// Character display.
pub trait DisplayPort {
    fn set_layout(&mut self, layout: DisplayLayout);

    /// Draw the clock face in the current layout.
    fn show_clock(&mut self, time: ClockTime, date: ClockDate, alarm: AlarmIndicator);

    /// Draw two raw text lines, padding each to the display width.
    fn show_lines(&mut self, line1: &str, line2: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
