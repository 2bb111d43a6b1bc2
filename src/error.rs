//! Unified error types for the UART echo firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! startup path's error handling uniform. All variants are `Copy` so they
//! can be cheaply passed around without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed (driver install, timer create).
    Init(&'static str),
    /// The requested UART configuration was rejected.
    Config(&'static str),
    /// A byte-channel read or write failed.
    Channel(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Channel(msg) => write!(f, "channel: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
