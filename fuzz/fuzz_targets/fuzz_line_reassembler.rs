//! Fuzz the line reassembler with arbitrary chunked input.
//!
//! The first byte of each chunk boundary comes from the fuzz input itself,
//! so the fuzzer explores delivery granularity as well as content.

#![no_main]

use libfuzzer_sys::fuzz_target;
use uartecho::line::LineReassembler;

fuzz_target!(|data: &[u8]| {
    let mut r = LineReassembler::new();

    let mut rest = data;
    while !rest.is_empty() {
        let take = (rest[0] as usize % 17) + 1;
        let take = take.min(rest.len());
        r.append(&rest[..take]);
        rest = &rest[take..];

        while let Some(line) = r.extract_line() {
            // Invariants: no terminator bytes inside a line, never empty.
            assert!(!line.is_empty());
            assert!(!line.contains(&b'\r') && !line.contains(&b'\n'));
        }
    }
});
