//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ EchoService (domain)
//! ```
//!
//! Driven adapters (the UART driver, the log sink) implement these traits.
//! The [`EchoService`](super::service::EchoService) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Byte channel port (driven adapter: UART / TCP / mock ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented channel port.
///
/// Concrete implementations:
/// - UART serial (ESP-IDF driver)
/// - In-memory mock (integration tests)
///
/// Reads are non-blocking: a call may return fewer bytes than requested,
/// including zero. Writes are order-preserving.
pub trait ByteChannel {
    /// Error type for this channel.
    type Error: core::fmt::Debug;

    /// Number of inbound bytes currently buffered and readable.
    fn rx_available(&self) -> usize;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read; 0 means no data.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `data` to the channel.
    /// Returns the number of bytes actually written.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A null channel that discards all writes and never has data.
/// Useful as a stand-in when no UART is wired up (host runs).
pub struct NullByteChannel;

impl ByteChannel for NullByteChannel {
    type Error = ();

    fn rx_available(&self) -> usize {
        0
    }

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> {
        Ok(0)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, a test
/// recorder, etc.). Purely observational — never affects control flow.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent<'_>);
}
