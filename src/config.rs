//! System configuration parameters
//!
//! All tunable parameters for the UART echo demo. The defaults mirror the
//! classic serial console setup (115200 8-N-1); they are set explicitly
//! rather than relying on driver defaults so a reader can see the full
//! peripheral mode in one place.

use serde::{Deserialize, Serialize};

/// UART parity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// UART stop-bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopBits {
    One,
    Two,
}

/// Line settings for the echo UART.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UartSettings {
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Data bits per character (5–8).
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: StopBits,
}

/// Core system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Settings for the echo UART peripheral.
    pub uart: UartSettings,

    // --- Timing ---
    /// Heartbeat message interval (milliseconds).
    pub heartbeat_interval_ms: u32,
    /// Inbound serial poll interval (milliseconds).
    pub serial_poll_interval_ms: u32,
}

impl Default for UartSettings {
    fn default() -> Self {
        Self {
            // 115200 8-N-1 — the default mode, but we set it anyway.
            baud_rate: 115_200,
            data_bits: 8,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            uart: UartSettings::default(),
            heartbeat_interval_ms: 1000, // 1 Hz
            serial_poll_interval_ms: 20, // 50 Hz
        }
    }
}

impl SystemConfig {
    /// Validate every field, returning the first offending one.
    ///
    /// Invalid values are rejected, never clamped — a bad config must be
    /// visible at startup, not silently papered over.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.uart.baud_rate < 300 || self.uart.baud_rate > 5_000_000 {
            return Err("uart.baud_rate out of range (300..=5000000)");
        }
        if !(5..=8).contains(&self.uart.data_bits) {
            return Err("uart.data_bits out of range (5..=8)");
        }
        if self.heartbeat_interval_ms == 0 {
            return Err("heartbeat_interval_ms must be non-zero");
        }
        if self.serial_poll_interval_ms == 0 {
            return Err("serial_poll_interval_ms must be non-zero");
        }
        Ok(())
    }
}
