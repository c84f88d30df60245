//! Unified error types for the alarm clock firmware.
//!
//! The gesture path has no error states at all: inconsistent edge
//! observations are absorbed by the classifier's periodic re-sampling.
//! What remains fallible is configuration, clock value validation, and
//! peripheral bring-up. All variants are `Copy` so they can be returned
//! through port traits without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// A time-of-day value is out of range.
    InvalidTime,
    /// A calendar date is out of range.
    InvalidDate,
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::InvalidTime => write!(f, "invalid time of day"),
            Self::InvalidDate => write!(f, "invalid calendar date"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
