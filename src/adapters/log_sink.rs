//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (ESP-IDF console UART / USB-CDC in production). A future
//! telemetry adapter would implement the same trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent<'_>) {
        match event {
            AppEvent::Started { channel } => {
                info!("START | echo service on UART{}", channel);
            }
            AppEvent::LineReceived { channel, line } => {
                // Input is arbitrary bytes; render lossily for the console.
                info!("UART{}> '{}'", channel, String::from_utf8_lossy(line));
            }
            AppEvent::ResponseSent { channel, len } => {
                debug!("UART{}< {} bytes", channel, len);
            }
            AppEvent::Heartbeat { channel, seq } => {
                debug!("BEAT  | UART{} seq={}", channel, seq);
            }
            AppEvent::ChannelError { channel } => {
                warn!("FAULT | UART{} channel I/O error", channel);
            }
        }
    }
}
