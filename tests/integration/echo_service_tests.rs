//! Integration tests for the EchoService → reassembler → reply pipeline.
//!
//! These run on the host (x86_64) and verify the full chain from inbound
//! byte delivery to the exact reply bytes on the wire, without any real
//! hardware.

use crate::mock_channel::{MockChannel, RecordingSink};

use uartecho::app::service::EchoService;

fn make_service() -> (EchoService, MockChannel, RecordingSink) {
    let mut svc = EchoService::new(1);
    let ch = MockChannel::new();
    let mut sink = RecordingSink::new();
    svc.start(&mut sink);
    (svc, ch, sink)
}

// ── Greeting and echo replies ────────────────────────────────

#[test]
fn hi_line_earns_greeting() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"hi\r\n");
    svc.on_data_ready(&mut ch, &mut sink);

    assert_eq!(ch.tx_as_str(), "Hello!\r\n");
    assert_eq!(sink.lines_received(), 1);
}

#[test]
fn uppercase_hi_with_bare_cr_also_greets() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"HI\r");
    svc.on_data_ready(&mut ch, &mut sink);

    assert_eq!(ch.tx_as_str(), "Hello!\r\n");
}

#[test]
fn other_lines_are_echoed_back_quoted() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"test123\n");
    svc.on_data_ready(&mut ch, &mut sink);

    assert_eq!(ch.tx_as_str(), "You said 'test123'.\r\n");
}

// ── Delivery granularity ─────────────────────────────────────

#[test]
fn line_split_across_notifications_still_replies_once() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"te");
    svc.on_data_ready(&mut ch, &mut sink);
    assert!(ch.tx.is_empty(), "no reply before the line completes");

    ch.push_rx(b"st");
    svc.on_data_ready(&mut ch, &mut sink);
    assert!(ch.tx.is_empty());

    ch.push_rx(b"\n");
    svc.on_data_ready(&mut ch, &mut sink);
    assert_eq!(ch.tx_as_str(), "You said 'test'.\r\n");
    assert_eq!(sink.lines_received(), 1);
}

#[test]
fn multiple_chunks_in_one_notification_are_all_drained() {
    let (mut svc, mut ch, mut sink) = make_service();

    // Both chunks are buffered before the notification fires; the service
    // must keep reading while data remains available.
    ch.push_rx(b"one\n");
    ch.push_rx(b"two\n");
    svc.on_data_ready(&mut ch, &mut sink);

    assert_eq!(ch.tx_as_str(), "You said 'one'.\r\nYou said 'two'.\r\n");
    assert_eq!(sink.lines_received(), 2);
}

#[test]
fn notification_with_no_data_is_a_noop() {
    let (mut svc, mut ch, mut sink) = make_service();

    svc.on_data_ready(&mut ch, &mut sink);

    assert!(ch.tx.is_empty());
    assert_eq!(sink.lines_received(), 0);
    assert!(svc.pending_input().is_empty());
}

// ── CRLF leftover behavior ───────────────────────────────────

#[test]
fn crlf_leaves_the_lf_pending() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"hi\r\n");
    svc.on_data_ready(&mut ch, &mut sink);

    // Only content + \r were consumed; the \n stays buffered and blocks
    // further extraction until it is the leading byte of a longer buffer.
    assert_eq!(svc.pending_input(), b"\n");
    assert_eq!(ch.tx_as_str(), "Hello!\r\n");

    // A follow-up notification with no new data changes nothing.
    svc.on_data_ready(&mut ch, &mut sink);
    assert_eq!(svc.pending_input(), b"\n");
    assert_eq!(sink.lines_received(), 1);
}

#[test]
fn mixed_terminators_split_by_earliest_offset() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"ab\ncd\ref\n");
    svc.on_data_ready(&mut ch, &mut sink);

    // "ab" (\n at 2 beats \r at 5), then "cd", then "ef".
    assert_eq!(
        ch.tx_as_str(),
        "You said 'ab'.\r\nYou said 'cd'.\r\nYou said 'ef'.\r\n"
    );
    assert_eq!(sink.lines_received(), 3);
    assert!(svc.pending_input().is_empty());
}

#[test]
fn leftover_terminator_sticks_across_deliveries() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"hello\r\nworld\n");
    svc.on_data_ready(&mut ch, &mut sink);

    // "hello" is answered; "\nworld\n" stays buffered because the next
    // terminator sits at offset 0.
    assert_eq!(ch.tx_as_str(), "You said 'hello'.\r\n");
    assert_eq!(svc.pending_input(), b"\nworld\n");
}

// ── Error paths ──────────────────────────────────────────────

#[test]
fn read_failure_is_reported_not_fatal() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"hi\r\n");
    ch.fail_reads = true;
    svc.on_data_ready(&mut ch, &mut sink);
    assert_eq!(sink.channel_errors(), 1);

    // Recovery: the same service keeps working once reads succeed again.
    ch.fail_reads = false;
    svc.on_data_ready(&mut ch, &mut sink);
    assert_eq!(ch.tx_as_str(), "Hello!\r\n");
}

#[test]
fn write_failure_stops_the_reply_loop() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"one\ntwo\n");
    ch.fail_writes = true;
    svc.on_data_ready(&mut ch, &mut sink);

    assert_eq!(sink.channel_errors(), 1);
    // Both lines were received; only the first reply was attempted.
    assert_eq!(sink.lines_received(), 1);
}

// ── Heartbeat ────────────────────────────────────────────────

#[test]
fn heartbeat_messages_carry_increasing_sequence() {
    let (mut svc, mut ch, mut sink) = make_service();

    svc.on_heartbeat(&mut ch, &mut sink);
    svc.on_heartbeat(&mut ch, &mut sink);
    svc.on_heartbeat(&mut ch, &mut sink);

    assert_eq!(
        ch.tx_as_str(),
        "Hello, UART1! 0\r\nHello, UART1! 1\r\nHello, UART1! 2\r\n"
    );
    assert_eq!(svc.heartbeat_seq(), 3);
}

#[test]
fn heartbeat_and_echo_share_no_state() {
    let (mut svc, mut ch, mut sink) = make_service();

    ch.push_rx(b"hi");
    svc.on_data_ready(&mut ch, &mut sink);
    svc.on_heartbeat(&mut ch, &mut sink);

    // A heartbeat in the middle of a partial line must not disturb it.
    assert_eq!(svc.pending_input(), b"hi");
    assert_eq!(ch.tx_as_str(), "Hello, UART1! 0\r\n");

    ch.push_rx(b"\r\n");
    svc.on_data_ready(&mut ch, &mut sink);
    assert_eq!(ch.tx_as_str(), "Hello, UART1! 0\r\nHello!\r\n");
}
