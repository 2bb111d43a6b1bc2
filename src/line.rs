//! Accumulating line reassembly.
//!
//! A UART delivers bytes at arbitrary granularity — a read may return part
//! of a line, several lines concatenated, or nothing at all. The
//! [`LineReassembler`] buffers whatever arrives and yields one complete
//! line at a time, handling all the wonderful possibilities of different
//! line endings (`\r`, `\n`, `\r\n`).
//!
//! ```text
//!  read() chunks ──▶ append() ──▶ [ buffer ] ──▶ extract_line() ──▶ line
//! ```
//!
//! Terminator selection is by byte offset, not CRLF pairing: whichever of
//! the first `\r` and the first `\n` occurs earlier ends the line. Exactly
//! one terminator byte is consumed per extraction, so a `\r\n` pair leaves
//! its `\n` behind in the buffer.

/// Streaming line reassembler.
///
/// One instance per input channel; all access must come from a single
/// execution context (the main loop). The buffer grows with input and
/// shrinks from the front as lines are extracted.
pub struct LineReassembler {
    buf: Vec<u8>,
}

impl LineReassembler {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append a chunk of raw bytes to the buffer.
    ///
    /// No parsing happens here; an empty chunk is a no-op.
    pub fn append(&mut self, chunk: &[u8]) {
        if chunk.is_empty() {
            return;
        }
        self.buf.extend_from_slice(chunk);
    }

    /// Extract the first complete line, if one is buffered.
    ///
    /// Returns the line content without its terminator and removes the
    /// content plus exactly one terminator byte from the buffer. Returns
    /// `None` (buffer untouched) when no terminator is present, and also
    /// when the first terminator sits at offset 0 — a leftover `\n` from a
    /// split `\r\n` stays in the buffer rather than yielding an empty line.
    pub fn extract_line(&mut self) -> Option<Vec<u8>> {
        let cr = self.buf.iter().position(|&b| b == b'\r');
        let lf = self.buf.iter().position(|&b| b == b'\n');

        let term = match (cr, lf) {
            (None, None) => return None,
            (Some(c), None) => c,
            (None, Some(l)) => l,
            (Some(c), Some(l)) => c.min(l),
        };

        if term == 0 {
            return None;
        }

        let line = self.buf[..term].to_vec();
        // Drop the line plus one terminator byte; for \r\n only the \r goes.
        self.buf.drain(..=term);
        Some(line)
    }

    /// Bytes currently buffered and not yet consumed.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Default for LineReassembler {
    fn default() -> Self {
        Self::new()
    }
}
