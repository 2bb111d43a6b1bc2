//! Mock byte channel and recording event sink for integration tests.
//!
//! The channel holds a scripted inbound byte stream and records every
//! write, so tests can assert on the exact reply bytes without touching
//! a real UART.

use std::collections::VecDeque;

use uartecho::app::events::AppEvent;
use uartecho::app::ports::{ByteChannel, EventSink};

// ── MockChannel ───────────────────────────────────────────────

pub struct MockChannel {
    /// Scripted inbound chunks; each `read` drains from the front chunk.
    rx: VecDeque<Vec<u8>>,
    /// Everything written to the channel, in order.
    pub tx: Vec<u8>,
    /// When set, every read fails.
    pub fail_reads: bool,
    /// When set, every write fails.
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MockChannel {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Queue one inbound chunk. Each chunk is surfaced by a separate
    /// `read` call, so tests control delivery granularity exactly.
    pub fn push_rx(&mut self, chunk: &[u8]) {
        self.rx.push_back(chunk.to_vec());
    }

    pub fn tx_as_str(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteChannel for MockChannel {
    type Error = &'static str;

    fn rx_available(&self) -> usize {
        self.rx.front().map_or(0, Vec::len)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, &'static str> {
        if self.fail_reads {
            return Err("scripted read failure");
        }
        let Some(front) = self.rx.front_mut() else {
            return Ok(0);
        };
        let n = front.len().min(buf.len());
        buf[..n].copy_from_slice(&front[..n]);
        front.drain(..n);
        if front.is_empty() {
            self.rx.pop_front();
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, &'static str> {
        if self.fail_writes {
            return Err("scripted write failure");
        }
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), &'static str> {
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Sink that owns a debug rendering of every emitted event.
pub struct RecordingSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn lines_received(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.starts_with("LineReceived"))
            .count()
    }

    pub fn channel_errors(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.starts_with("ChannelError"))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent<'_>) {
        self.events.push(format!("{:?}", event));
    }
}
