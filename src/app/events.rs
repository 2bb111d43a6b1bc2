//! Outbound application events.
//!
//! The [`EchoService`](super::service::EchoService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — log to serial, record in a test, etc.
//!
//! Line payloads are borrowed so the emit path never allocates.

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent<'a> {
    /// The echo service has started on the given channel.
    Started { channel: u8 },

    /// A complete line was reassembled from inbound bytes.
    LineReceived { channel: u8, line: &'a [u8] },

    /// A reply was written to the channel.
    ResponseSent { channel: u8, len: usize },

    /// The periodic heartbeat was emitted.
    Heartbeat { channel: u8, seq: u32 },

    /// A channel read or write failed.
    ChannelError { channel: u8 },
}
