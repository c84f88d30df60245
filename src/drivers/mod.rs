//! Button input sources and one-shot hardware initialisation.

pub mod button;
pub mod hw_init;
