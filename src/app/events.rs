//! Outbound application events.
//!
//! The [`ClockService`](super::service::ClockService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use super::menu::Mode;
use super::ports::DisplayLayout;
use crate::gesture::Gesture;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries initial mode).
    Started(Mode),

    /// A classified button gesture was consumed.
    Gesture(Gesture),

    /// The menu controller changed mode.
    ModeChanged { from: Mode, to: Mode },

    /// Alarm armed (`true`) or disarmed (`false`).
    AlarmToggled(bool),

    /// Alarm time reached.
    AlarmTriggered,

    /// A ringing alarm was dismissed.
    AlarmDismissed,

    /// Clock face layout changed.
    LayoutChanged(DisplayLayout),
}
