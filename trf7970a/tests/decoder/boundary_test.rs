#[path = "../common/mod.rs"]
mod common;

use trf7970a::prelude::*;

#[test]
fn select_then_deselect_emits_nothing() {
    let mut d = Decoder::new();
    assert!(d.feed(BusEvent::Select).is_none());
    assert!(d.feed(BusEvent::deselect(Timestamp::new(4))).is_none());
    assert!(d.state().is_idle());
}

#[test]
fn empty_burst_emits_frame_with_empty_data() {
    let fields = common::decode_fields(common::transaction_events(&[(0x7f, 0x00)]));
    assert_eq!(
        fields,
        vec![FrameFields::Address {
            command: "READ(c)".to_string(),
            address: "0x1f - FIFO".to_string(),
            data: String::new(),
        }]
    );
}

#[test]
fn direct_access_returns_to_instruction_phase() {
    // Two direct writes in one select window, the second byte pair is
    // interpreted as a fresh instruction.
    let fields = common::decode_fields(common::transaction_events(&[
        (0x00, 0x00),
        (0x21, 0x00),
        (0x8f, 0x00),
    ]));
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].command(), "WRITE");
    assert_eq!(fields[1].command(), "0x0f - RESET_FIFO");
}

#[test]
fn consecutive_commands_in_one_transaction() {
    let frames = Decoder::new().decode(common::transaction_events(&[
        (0x8f, 0x00),
        (0x91, 0x00),
    ]));
    assert_eq!(frames.len(), 2);
    assert!(frames.iter().all(|f| matches!(f.kind, FrameKind::Command { .. })));
    assert_eq!(frames[1].span.start, Timestamp::new(8));
}

#[test]
fn incomplete_direct_dropped_silently() {
    let events = common::transaction_events(&[(0x45, 0x00)]);
    let frames = common::decode_with_policy(IncompletePolicy::Silent, events);
    assert!(frames.is_empty());
}

#[test]
fn incomplete_direct_reported_on_request() {
    let events = common::transaction_events(&[(0x45, 0x00)]);
    let frames = common::decode_with_policy(IncompletePolicy::Report, events);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].to_string(), "READ (incomplete) @ 0x05 - TX_TIMER_EPC [ ]");
    assert_eq!(frames[0].span.start, Timestamp::new(0));
    assert_eq!(frames[0].span.end, Timestamp::new(8));
}

#[test]
fn abandoned_burst_on_reselect() {
    let mut events = vec![
        BusEvent::Select,
        common::transfer_at(0x3f, 0x00, 0),
        common::transfer_at(0x00, 0x01, 8),
    ];
    events.extend(common::fixtures::soft_init());

    let silent = common::decode_with_policy(IncompletePolicy::Silent, events.clone());
    assert_eq!(silent.len(), 1);
    assert_eq!(silent[0].fields().command(), "0x03 - SOFT_INIT");

    let reported = common::decode_with_policy(IncompletePolicy::Report, events);
    assert_eq!(reported.len(), 2);
    assert!(reported[0].is_incomplete());
    assert_eq!(reported[0].data(), &[0x01]);
}

#[test]
fn orphan_bytes_before_select_are_ignored() {
    let mut d = Decoder::new();
    let mut events = vec![common::transfer_at(0x83, 0x00, 0)];
    events.extend(common::fixtures::soft_init());
    let frames = d.decode(events);
    assert_eq!(frames.len(), 1);
    assert_eq!(d.stats().orphan_bytes, 1);
}

#[test]
fn bytes_after_deselect_are_orphans() {
    let mut d = Decoder::new();
    let mut events = common::fixtures::direct_read_tx_timer();
    events.push(common::transfer_at(0x83, 0x00, 64));
    let frames = d.decode(events);
    assert_eq!(frames.len(), 1);
    assert_eq!(d.stats().orphan_bytes, 1);
}

#[test]
fn independent_decoders_do_not_share_state() {
    let mut a = Decoder::new();
    let mut b = Decoder::new();
    a.feed(BusEvent::Select);
    a.feed(common::transfer_at(0x31, 0x00, 0));
    assert!(a.state().pending().is_some());
    assert!(b.state().is_idle());
    assert!(b.feed(BusEvent::deselect(Timestamp::new(10))).is_none());
    assert!(a.feed(BusEvent::deselect(Timestamp::new(10))).is_some());
}
