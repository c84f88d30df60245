//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the alarm clock's behaviour on top of the gesture
//! classifier: the menu/edit controller, alarm handling, and clock face
//! layout. All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod clock;
pub mod events;
pub mod menu;
pub mod ports;
pub mod service;
