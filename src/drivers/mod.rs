//! Peripheral drivers and hardware timers.

pub mod hw_timer;
pub mod uart;
