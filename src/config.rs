//! System configuration parameters
//!
//! All tunable parameters for the alarm clock. Button timings are fixed at
//! construction of the gesture classifier; there is no runtime
//! reconfiguration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ceiling for the global log level on target. The gesture classifier logs
/// transitions at `debug` from the GPIO ISR, and those records must never
/// reach the ESP-IDF logger.
pub const MAX_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Gesture classifier timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Minimum settle time before a raw transition is trusted (ms).
    pub debounce_ms: u32,
    /// Held duration that reclassifies a press as long (ms).
    pub long_press_ms: u32,
    /// Maximum gap between two short clicks for a double click (ms).
    pub double_click_window_ms: u32,
    /// Period of the main-loop `advance()` poll (ms).
    pub poll_period_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            long_press_ms: 1000,
            double_click_window_ms: 300,
            poll_period_ms: 10,
        }
    }
}

impl ButtonConfig {
    /// Reject timings the classifier cannot honour.
    ///
    /// The poll must run at least twice per debounce interval, otherwise a
    /// debounce can expire unobserved for most of a poll period.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Config("debounce_ms must be non-zero"));
        }
        if self.poll_period_ms == 0 {
            return Err(Error::Config("poll_period_ms must be non-zero"));
        }
        if self.poll_period_ms > self.debounce_ms / 2 {
            return Err(Error::Config("poll_period_ms must be <= debounce_ms / 2"));
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(Error::Config("long_press_ms must exceed debounce_ms"));
        }
        if self.double_click_window_ms <= self.debounce_ms {
            return Err(Error::Config("double_click_window_ms must exceed debounce_ms"));
        }
        Ok(())
    }
}

/// Time of day at which the alarm rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmTime {
    pub hours: u8,
    pub minutes: u8,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Input ---
    pub button: ButtonConfig,

    // --- Display ---
    /// Edit-mode cursor blink half-period (ms).
    pub blink_period_ms: u32,
    /// How long the startup banner stays on screen (ms).
    pub startup_banner_ms: u32,

    // --- Alarm ---
    pub alarm: AlarmTime,
    /// Alarm armed at boot.
    pub alarm_enabled: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            button: ButtonConfig::default(),

            blink_period_ms: 500,
            startup_banner_ms: 1000,

            alarm: AlarmTime {
                hours: 7,
                minutes: 30,
            },
            alarm_enabled: true,
        }
    }
}

impl SystemConfig {
    pub fn validate(&self) -> Result<()> {
        self.button.validate()?;
        if self.blink_period_ms == 0 {
            return Err(Error::Config("blink_period_ms must be non-zero"));
        }
        if self.alarm.hours > 23 || self.alarm.minutes > 59 {
            return Err(Error::Config("alarm time out of range"));
        }
        Ok(())
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }
}
