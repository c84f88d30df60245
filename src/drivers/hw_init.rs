//! One-shot button peripheral initialization.
//!
//! Configures the button GPIO and registers its interrupt handler using raw
//! ESP-IDF sys calls. Called once from `main()` before the poll loop starts.
//! Host builds get logging no-op stand-ins.

#[cfg(feature = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(feature = "espidf")]
use log::{error, info};

use crate::error::Result;
#[cfg(feature = "espidf")]
use crate::error::Error;
#[cfg(feature = "espidf")]
use crate::pins;

// ── GPIO input ────────────────────────────────────────────────

/// Configure the button GPIO as an input that interrupts on both edges.
/// The internal pull holds the line at its inactive level.
#[cfg(feature = "espidf")]
pub fn init_button() -> Result<()> {
    let (pull_up_en, pull_down_en) = if pins::BUTTON_ACTIVE_HIGH {
        (gpio_pullup_t_GPIO_PULLUP_DISABLE, gpio_pulldown_t_GPIO_PULLDOWN_ENABLE)
    } else {
        (gpio_pullup_t_GPIO_PULLUP_ENABLE, gpio_pulldown_t_GPIO_PULLDOWN_DISABLE)
    };
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en,
        pull_down_en,
        intr_type: gpio_int_type_t_GPIO_INTR_ANYEDGE,
    };
    // SAFETY: Called once from main() before the ISR is registered.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        error!("hw_init: button gpio_config failed (rc={})", ret);
        return Err(Error::Init("button GPIO config failed"));
    }
    info!(
        "hw_init: button on GPIO{} (active {})",
        pins::BUTTON_GPIO,
        if pins::BUTTON_ACTIVE_HIGH { "high" } else { "low" }
    );
    Ok(())
}

#[cfg(not(feature = "espidf"))]
pub fn init_button() -> Result<()> {
    log::info!("hw_init(sim): button GPIO init skipped");
    Ok(())
}

#[cfg(feature = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe from ISR and main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(feature = "espidf")]
unsafe extern "C" fn button_gpio_isr(_arg: *mut core::ffi::c_void) {
    crate::drivers::button::BUTTON.on_interrupt(crate::adapters::time::isr_now_ms());
}

/// Install the per-pin GPIO ISR service and register the button handler.
/// Call after [`init_button`] and after the classifier is installed.
#[cfg(feature = "espidf")]
pub fn init_isr_service() -> Result<()> {
    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable). The handler is a static
    // function that only enters the classifier's critical section.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
            error!("hw_init: gpio_install_isr_service failed (rc={})", ret);
            return Err(Error::Init("GPIO ISR service install failed"));
        }

        let ret = gpio_isr_handler_add(
            pins::BUTTON_GPIO,
            Some(button_gpio_isr),
            core::ptr::null_mut(),
        );
        if ret != ESP_OK as i32 {
            error!("hw_init: gpio_isr_handler_add failed (rc={})", ret);
            return Err(Error::Init("button ISR registration failed"));
        }
        gpio_intr_enable(pins::BUTTON_GPIO);
    }
    info!("hw_init: ISR service installed (button, any edge)");
    Ok(())
}

#[cfg(not(feature = "espidf"))]
pub fn init_isr_service() -> Result<()> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
