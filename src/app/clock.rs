//! Wall-clock value types.
//!
//! Validated on construction, so anything holding a `ClockTime` or
//! `ClockDate` can format and compare it without re-checking ranges.

use core::fmt;

use crate::error::{Error, Result};

/// 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(Error::InvalidTime);
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Build from seconds since midnight (taken modulo one day).
    pub fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hours: (secs / 3600) as u8,
            minutes: (secs / 60 % 60) as u8,
            seconds: (secs % 60) as u8,
        }
    }

    pub fn seconds_of_day(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Calendar date, 2000–2099. `weekday` is 1 = Monday … 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDate {
    day: u8,
    month: u8,
    year: u16,
    weekday: u8,
}

impl Default for ClockDate {
    /// 01/01/2000, a Saturday.
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: 2000,
            weekday: 6,
        }
    }
}

impl ClockDate {
    pub fn new(day: u8, month: u8, year: u16, weekday: u8) -> Result<Self> {
        if !(2000..=2099).contains(&year)
            || !(1..=12).contains(&month)
            || !(1..=7).contains(&weekday)
            || day == 0
            || day > days_in_month(month, year)
        {
            return Err(Error::InvalidDate);
        }
        Ok(Self {
            day,
            month,
            year,
            weekday,
        })
    }

    /// The following calendar day. Wraps from 31/12/2099 back to 01/01/2000.
    pub fn next_day(&self) -> Self {
        let weekday = self.weekday % 7 + 1;
        if self.day < days_in_month(self.month, self.year) {
            return Self {
                day: self.day + 1,
                weekday,
                ..*self
            };
        }
        if self.month < 12 {
            return Self {
                day: 1,
                month: self.month + 1,
                weekday,
                ..*self
            };
        }
        let year = if self.year >= 2099 { 2000 } else { self.year + 1 };
        Self {
            day: 1,
            month: 1,
            year,
            weekday,
        }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    /// Three-letter weekday name for the LCD.
    pub fn weekday_name(&self) -> &'static str {
        const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        NAMES[(self.weekday.clamp(1, 7) - 1) as usize]
    }
}

impl fmt::Display for ClockDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
