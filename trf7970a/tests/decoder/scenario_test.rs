#[path = "../common/mod.rs"]
mod common;

use trf7970a::prelude::*;

#[test]
fn burst_write_decodes_to_single_address_frame() {
    common::init_logging();
    let fields = common::decode_fields(common::fixtures::burst_write_special_func_2());
    assert_eq!(
        fields,
        vec![FrameFields::Address {
            command: "WRITE(c)".to_string(),
            address: "0x11 - SPECIAL_FUNC_2".to_string(),
            data: "0xaa 0xbb ".to_string(),
        }]
    );
}

#[test]
fn soft_init_command() {
    let fields = common::decode_fields(common::fixtures::soft_init());
    assert_eq!(
        fields,
        vec![FrameFields::Command {
            command: "0x03 - SOFT_INIT".to_string()
        }]
    );
}

#[test]
fn direct_read_takes_miso_value() {
    let fields = common::decode_fields(common::fixtures::direct_read_tx_timer());
    assert_eq!(
        fields,
        vec![FrameFields::Address {
            command: "READ".to_string(),
            address: "0x05 - TX_TIMER_EPC".to_string(),
            data: "0x7f ".to_string(),
        }]
    );
}

#[test]
fn init_sequence_renders_like_analyzer() {
    let mut decoder = Decoder::new();
    let lines: Vec<String> = decoder
        .decode(common::fixtures::init_sequence())
        .iter()
        .map(|f| f.to_string())
        .collect();
    assert_eq!(
        lines,
        vec![
            "CMD 0x03 - SOFT_INIT",
            "CMD 0x00 - IDLE",
            "WRITE @ 0x00 - CHIP_STATUS_CTRL [ 0x21 ]",
            "WRITE @ 0x01 - ISO_CONTROL [ 0x08 ]",
            "READ @ 0x0c - IRQ_STATUS [ 0x80 ]",
            "CMD 0x0f - RESET_FIFO",
            "WRITE(c) @ 0x1d - TX_LENGTH_BYTE1 [ 0x00 0x20 0x26 ]",
            "READ(c) @ 0x1f - FIFO [ 0x04 0x00 ]",
        ]
    );
    assert_eq!(decoder.stats().command_frames, 3);
    assert_eq!(decoder.stats().address_frames, 5);
    assert!(decoder.state().is_idle());
}

#[test]
fn frame_data_parses_back_to_bytes() {
    let payload = common::fixtures::sample_hex_payload();
    let events = CaptureBuilder::new()
        .burst_write(RegisterAddress::FIFO, &payload)
        .build();
    let frames = Decoder::new().decode(events);
    assert_eq!(frames.len(), 1);
    match frames[0].fields() {
        FrameFields::Address { data, .. } => {
            assert_eq!(parse_hex(&data).unwrap(), payload);
        }
        other => panic!("expected address fields, got {:?}", other),
    }
}

#[test]
fn run_drains_event_source() -> anyhow::Result<()> {
    let mut source = CaptureBuilder::new()
        .command(CommandOpcode::TRANSMIT_CRC)
        .read_register(RegisterAddress::FIFO_STATUS, 0x03)
        .into_source();
    let frames = Decoder::new().run(&mut source)?;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].fields().command(), "0x11 - TRANSMIT_CRC");
    assert_eq!(frames[1].to_string(), "READ @ 0x1c - FIFO_STATUS [ 0x03 ]");
    Ok(())
}

#[test]
fn run_propagates_source_error() {
    let mut source = ScriptedSource::new(common::fixtures::soft_init());
    source.set_fail_after(2);
    match Decoder::new().run(&mut source) {
        Err(Error::Source(msg)) => assert!(msg.contains("2 events")),
        other => panic!("expected source error, got {:?}", other),
    }
}
