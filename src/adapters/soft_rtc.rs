//! Software real-time clock.
//!
//! Keeps wall-clock time as seconds-of-day plus a calendar date, advanced
//! from the monotonic millisecond timebase. Implements [`ClockPort`] so the
//! service cannot tell it apart from a hardware RTC; the periodic-tick flag
//! is raised once for every whole second that elapses.

use log::debug;

use crate::app::clock::{ClockDate, ClockTime, SECONDS_PER_DAY};
use crate::app::ports::ClockPort;
use crate::error::Result;

pub struct SoftRtc {
    seconds_of_day: u32,
    date: ClockDate,
    /// Monotonic timestamp corresponding to the start of the current second.
    anchor_ms: u32,
    tick_pending: bool,
}

impl SoftRtc {
    /// Start at 00:00:00 on 01/01/2000, anchored at `now_ms`.
    pub fn new(now_ms: u32) -> Self {
        Self {
            seconds_of_day: 0,
            date: ClockDate::default(),
            anchor_ms: now_ms,
            tick_pending: false,
        }
    }

    /// Advance the clock to the monotonic instant `now_ms`.
    pub fn sync(&mut self, now_ms: u32) {
        let elapsed_s = now_ms.wrapping_sub(self.anchor_ms) / 1000;
        if elapsed_s == 0 {
            return;
        }
        self.anchor_ms = self.anchor_ms.wrapping_add(elapsed_s * 1000);
        self.tick_pending = true;

        let total = self.seconds_of_day + elapsed_s;
        for _ in 0..total / SECONDS_PER_DAY {
            self.date = self.date.next_day();
            debug!("rtc: date rolled over to {}", self.date);
        }
        self.seconds_of_day = total % SECONDS_PER_DAY;
    }
}

impl ClockPort for SoftRtc {
    fn time(&self) -> ClockTime {
        ClockTime::from_seconds_of_day(self.seconds_of_day)
    }

    fn date(&self) -> ClockDate {
        self.date
    }

    fn set_time(&mut self, time: ClockTime) -> Result<()> {
        self.seconds_of_day = time.seconds_of_day();
        self.tick_pending = true;
        Ok(())
    }

    fn set_date(&mut self, date: ClockDate) -> Result<()> {
        self.date = date;
        self.tick_pending = true;
        Ok(())
    }

    fn take_tick(&mut self) -> bool {
        core::mem::take(&mut self.tick_pending)
    }
}
