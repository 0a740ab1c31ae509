#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use trf7970a::prelude::*;

proptest! {
    #[test]
    fn command_bytes_emit_one_frame(byte in 0x80u8..=0xff) {
        let mut d = Decoder::new();
        d.on_select();
        let frame = d.on_byte_transfer(byte, 0x00, Timestamp::new(0), Timestamp::new(8));
        let is_command = matches!(
            frame,
            Some(Frame { kind: FrameKind::Command { .. }, .. })
        );
        prop_assert!(is_command);
        prop_assert_eq!(d.state(), &DecoderState::AwaitingInstruction);
    }

    #[test]
    fn direct_access_emits_after_one_byte(reg in 0u8..0x20, read in any::<bool>(), value in any::<u8>()) {
        let instr = reg | if read { 0x40 } else { 0x00 };
        let (mosi, miso) = if read { (0x00, value) } else { (value, 0x00) };
        let mut d = Decoder::new();
        d.on_select();
        prop_assert!(d.on_byte_transfer(instr, 0x00, Timestamp::new(0), Timestamp::new(8)).is_none());
        let frame = d.on_byte_transfer(mosi, miso, Timestamp::new(8), Timestamp::new(16));
        prop_assert_eq!(frame.map(|f| f.data().to_vec()), Some(vec![value]));
        prop_assert_eq!(d.state(), &DecoderState::AwaitingInstruction);
    }

    #[test]
    fn burst_collects_bytes_in_order(reg in 0u8..0x20, data in prop::collection::vec(any::<u8>(), 0..32)) {
        let events = CaptureBuilder::new()
            .burst_write(RegisterAddress::new(reg), &data)
            .build();
        let frames = Decoder::new().decode(events);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(frames[0].data(), &data[..]);
        prop_assert_eq!(frames[0].span.start, Timestamp::new(2));
    }

    #[test]
    fn arbitrary_event_streams_never_panic(ops in prop::collection::vec((0u8..3, any::<u8>(), any::<u8>()), 0..64)) {
        let mut d = Decoder::builder().report_incomplete().build();
        let mut at = 0u64;
        for (kind, mosi, miso) in ops {
            let event = match kind {
                0 => BusEvent::Select,
                1 => common::transfer_at(mosi, miso, at),
                _ => BusEvent::deselect(Timestamp::new(at)),
            };
            at += 8;
            if let Some(frame) = d.feed(event) {
                prop_assert!(frame.span.start <= frame.span.end);
            }
        }
    }
}
