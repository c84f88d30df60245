//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | mode={:?}", mode);
            }
            AppEvent::Gesture(gesture) => {
                info!("INPUT | {:?}", gesture);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::AlarmToggled(enabled) => {
                info!("ALARM | {}", if *enabled { "armed" } else { "disarmed" });
            }
            AppEvent::AlarmTriggered => {
                info!("ALARM | ringing");
            }
            AppEvent::AlarmDismissed => {
                info!("ALARM | dismissed");
            }
            AppEvent::LayoutChanged(layout) => {
                info!("VIEW  | layout={:?}", layout);
            }
        }
    }
}
