//! Raw button level sources for the gesture classifier.
//!
//! ## Hardware
//!
//! Momentary switch on [`pins::BUTTON_GPIO`](crate::pins::BUTTON_GPIO). The GPIO
//! fires on any edge; the ISR forwards the interrupt to the global
//! `BUTTON` classifier, which samples the level through one of the
//! [`RawInput`] implementations below to learn which way the line moved.
//! Debounce and gesture timing live in [`crate::gesture`]; nothing here
//! filters or delays.
//!
//! | Source           | Backing                               | Used by           |
//! |------------------|---------------------------------------|-------------------|
//! | [`PinInput`]     | any `embedded_hal::digital::InputPin` | portable builds, tests |
//! | `EspButtonInput` | `gpio_get_level` on the button GPIO   | target firmware   |

use embedded_hal::digital::InputPin;
use log::warn;

use crate::gesture::RawInput;

/// Adapts an `embedded-hal` input pin to [`RawInput`].
///
/// A failed read is reported as "released": the classifier re-samples on
/// every poll, so a transient error at worst delays a gesture.
pub struct PinInput<P> {
    pin: P,
    active_high: bool,
}

impl<P: InputPin> PinInput<P> {
    pub fn new(pin: P, active_high: bool) -> Self {
        Self { pin, active_high }
    }

    pub fn active_high(&self) -> bool {
        self.active_high
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> RawInput for PinInput<P> {
    fn is_pressed_raw(&mut self) -> bool {
        let level = if self.active_high {
            self.pin.is_high()
        } else {
            self.pin.is_low()
        };
        match level {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("button: pin read failed ({:?}), treating as released", e);
                false
            }
        }
    }
}

// ── Target input + global classifier ─────────────────────────

#[cfg(feature = "espidf")]
pub use target::{BUTTON, EspButtonInput};

#[cfg(feature = "espidf")]
mod target {
    use crate::drivers::hw_init;
    use crate::gesture::RawInput;
    use crate::gesture::shared::SharedClassifier;
    use crate::pins;

    /// Reads the button GPIO directly; callable from interrupt context.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EspButtonInput;

    impl RawInput for EspButtonInput {
        fn is_pressed_raw(&mut self) -> bool {
            hw_init::gpio_read(pins::BUTTON_GPIO) == pins::BUTTON_ACTIVE_HIGH
        }
    }

    /// Shared between the GPIO ISR and the main loop.
    /// Inert until `main` installs a classifier.
    pub static BUTTON: SharedClassifier<EspButtonInput> = SharedClassifier::new();
}
