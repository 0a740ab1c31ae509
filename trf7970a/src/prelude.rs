// trf7970a-rs/trf7970a/src/prelude.rs

pub use crate::decoder::{Decoder, DecoderBuilder, DecoderConfig, DecoderState, IncompletePolicy};
pub use crate::protocol::{AddressInstruction, BusEvent, Frame, FrameFields, FrameKind, Instruction};
pub use crate::source::{CaptureBuilder, EventSource, ScriptedSource};
pub use crate::{
    AddressMode, CommandOpcode, Error, Operation, RegisterAddress, Result, Timespan, Timestamp,
};

// Re-export small utilities for convenience
pub use crate::utils::{byte_token, bytes_to_hex_spaced, bytes_to_tokens, parse_hex};
