//! UartEcho firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod line;

pub mod pins;

// Adapter/driver modules compile on every target; the hardware-touching
// implementations inside are cfg-guarded with host fallbacks.
pub mod adapters;
pub mod drivers;
