//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common decoder setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::decoder::{Decoder, IncompletePolicy};
use crate::protocol::{BusEvent, Frame, FrameFields};
use crate::types::Timestamp;

/// Byte transfer event starting at `at` and lasting 8 ticks.
#[doc(hidden)]
pub fn transfer_at(mosi: u8, miso: u8, at: u64) -> BusEvent {
    BusEvent::byte_transfer(mosi, miso, Timestamp::new(at), Timestamp::new(at + 8))
}

/// Wrap `(mosi, miso)` pairs in select/deselect with 8-tick byte slots.
#[doc(hidden)]
pub fn transaction_events(bytes: &[(u8, u8)]) -> Vec<BusEvent> {
    let mut events = vec![BusEvent::Select];
    let mut at = 0u64;
    for &(mosi, miso) in bytes {
        events.push(transfer_at(mosi, miso, at));
        at += 8;
    }
    events.push(BusEvent::deselect(Timestamp::new(at)));
    events
}

/// Decode events with a fresh decoder using the given policy.
#[doc(hidden)]
pub fn decode_with_policy(policy: IncompletePolicy, events: Vec<BusEvent>) -> Vec<Frame> {
    let mut decoder = Decoder::builder().incomplete_policy(policy).build();
    decoder.decode(events)
}

/// Decode events with a fresh default decoder and return the display fields.
#[doc(hidden)]
pub fn decode_fields(events: Vec<BusEvent>) -> Vec<FrameFields> {
    decode_with_policy(IncompletePolicy::Silent, events)
        .iter()
        .map(Frame::fields)
        .collect()
}
