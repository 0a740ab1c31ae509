#[path = "../common/mod.rs"]
mod common;

use trf7970a::source::{CaptureBuilder, EventSource, ScriptedSource};
use trf7970a::types::RegisterAddress;

#[test]
fn capture_builder_into_source_replays_all_events() {
    let built = CaptureBuilder::new()
        .write_register(RegisterAddress::CHIP_STATUS_CTRL, 0x21)
        .build();
    let mut source = CaptureBuilder::new()
        .write_register(RegisterAddress::CHIP_STATUS_CTRL, 0x21)
        .into_source();
    assert_eq!(source.collect_events().unwrap(), built);
    assert_eq!(source.delivered, 4);
}

#[test]
fn scripted_source_from_fixture() {
    let mut source = ScriptedSource::from(common::fixtures::soft_init());
    assert_eq!(source.remaining(), 3);
    while source.next_event().unwrap().is_some() {}
    assert_eq!(source.remaining(), 0);
}
