//! Echo service — the hexagonal core.
//!
//! [`EchoService`] owns the line reassembler and the heartbeat sequence
//! counter. It exposes a clean, hardware-agnostic API. All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  ByteChannel ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │       EchoService         │
//!  ByteChannel ◀── │  reassembly · reply · seq │
//!                  └──────────────────────────┘
//! ```

use core::fmt::Write as _;

use log::warn;

use crate::line::LineReassembler;

use super::events::AppEvent;
use super::ports::{ByteChannel, EventSink};

/// Scratch size for a single channel read. The reassembler accumulates
/// across reads, so this bounds one read call, not line length.
const READ_CHUNK: usize = 128;

/// Upper bound for `Hello, UART255! 4294967295\r\n`.
const HEARTBEAT_MAX: usize = 32;

// ───────────────────────────────────────────────────────────────
// Reply policy
// ───────────────────────────────────────────────────────────────

/// Build the reply for one extracted line.
///
/// `hi` (ASCII case-insensitive) earns a greeting; everything else is
/// echoed back verbatim. The reply is assembled by explicit byte-slice
/// concatenation so the output bytes are exact regardless of line content.
pub fn respond_to_line(line: &[u8]) -> Vec<u8> {
    if line.eq_ignore_ascii_case(b"hi") {
        return b"Hello!\r\n".to_vec();
    }
    let mut out = Vec::with_capacity(line.len() + 16);
    out.extend_from_slice(b"You said '");
    out.extend_from_slice(line);
    out.extend_from_slice(b"'.\r\n");
    out
}

/// Format the periodic heartbeat message into a fixed-capacity string.
pub fn heartbeat_message(channel: u8, seq: u32) -> heapless::String<HEARTBEAT_MAX> {
    let mut msg = heapless::String::new();
    // Capacity covers the widest channel/seq values; a write can't fail.
    let _ = write!(msg, "Hello, UART{}! {}\r\n", channel, seq);
    msg
}

// ───────────────────────────────────────────────────────────────
// EchoService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates the echo protocol on one channel.
///
/// Single-threaded by design: the main loop is the only caller, so the
/// reassembler never sees concurrent mutation. A second input channel
/// gets its own `EchoService` instance.
pub struct EchoService {
    channel: u8,
    reassembler: LineReassembler,
    heartbeat_seq: u32,
}

impl EchoService {
    /// Construct the service for the given channel number.
    pub fn new(channel: u8) -> Self {
        Self {
            channel,
            reassembler: LineReassembler::new(),
            heartbeat_seq: 0,
        }
    }

    /// Announce startup through the sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            channel: self.channel,
        });
    }

    // ── Inbound data ──────────────────────────────────────────

    /// Handle a data-ready notification: drain the channel's receive
    /// buffer into the reassembler, then reply to every complete line.
    ///
    /// May be called with no data pending (the notification only means
    /// bytes *may* be available) — that case is a cheap no-op.
    pub fn on_data_ready(&mut self, ch: &mut impl ByteChannel, sink: &mut impl EventSink) {
        let mut scratch = [0u8; READ_CHUNK];

        loop {
            let avail = ch.rx_available();
            if avail == 0 {
                break;
            }
            let want = avail.min(scratch.len());
            match ch.read(&mut scratch[..want]) {
                Ok(0) => break,
                Ok(n) => self.reassembler.append(&scratch[..n]),
                Err(e) => {
                    warn!("UART{}: read failed: {:?}", self.channel, e);
                    sink.emit(&AppEvent::ChannelError {
                        channel: self.channel,
                    });
                    break;
                }
            }
        }

        while let Some(line) = self.reassembler.extract_line() {
            sink.emit(&AppEvent::LineReceived {
                channel: self.channel,
                line: &line,
            });

            let reply = respond_to_line(&line);
            match write_all(ch, &reply) {
                Ok(()) => sink.emit(&AppEvent::ResponseSent {
                    channel: self.channel,
                    len: reply.len(),
                }),
                Err(e) => {
                    warn!("UART{}: reply write failed: {:?}", self.channel, e);
                    sink.emit(&AppEvent::ChannelError {
                        channel: self.channel,
                    });
                    break;
                }
            }
        }
    }

    // ── Heartbeat ─────────────────────────────────────────────

    /// Emit one heartbeat message and advance the sequence counter.
    ///
    /// Independent of line reassembly — shares no state with the inbound
    /// path beyond the channel itself.
    pub fn on_heartbeat(&mut self, ch: &mut impl ByteChannel, sink: &mut impl EventSink) {
        let seq = self.heartbeat_seq;
        self.heartbeat_seq = self.heartbeat_seq.wrapping_add(1);

        let msg = heartbeat_message(self.channel, seq);
        match write_all(ch, msg.as_bytes()) {
            Ok(()) => sink.emit(&AppEvent::Heartbeat {
                channel: self.channel,
                seq,
            }),
            Err(e) => {
                warn!("UART{}: heartbeat write failed: {:?}", self.channel, e);
                sink.emit(&AppEvent::ChannelError {
                    channel: self.channel,
                });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Channel number this service is bound to.
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Heartbeats emitted since startup.
    pub fn heartbeat_seq(&self) -> u32 {
        self.heartbeat_seq
    }

    /// Bytes buffered but not yet forming a complete line.
    pub fn pending_input(&self) -> &[u8] {
        self.reassembler.pending()
    }
}

// ── Internal ──────────────────────────────────────────────────

/// Failure modes of [`write_all`].
#[derive(Debug)]
enum WriteError<E> {
    /// The channel accepted zero bytes; retrying would spin forever.
    Stalled,
    /// The channel reported an error.
    Channel(E),
}

/// Write the whole of `data`, looping over short writes.
fn write_all<C: ByteChannel>(ch: &mut C, data: &[u8]) -> Result<(), WriteError<C::Error>> {
    let mut off = 0;
    while off < data.len() {
        match ch.write(&data[off..]) {
            Ok(0) => return Err(WriteError::Stalled),
            Ok(n) => off += n,
            Err(e) => return Err(WriteError::Channel(e)),
        }
    }
    ch.flush().map_err(WriteError::Channel)
}
