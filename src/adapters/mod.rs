//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements   | Connects to                 |
//! |---------------|--------------|-----------------------------|
//! | `log_display` | DisplayPort  | Serial log (LCD1602 frames) |
//! | `log_sink`    | EventSink    | Serial log output           |
//! | `soft_rtc`    | ClockPort    | Monotonic timebase          |
//! | `time`        | —            | ESP32 system timer          |

pub mod log_display;
pub mod log_sink;
pub mod soft_rtc;
pub mod time;
