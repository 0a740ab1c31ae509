// trf7970a-rs/trf7970a/src/decoder/stats.rs

/// Counters for frames emitted and protocol conditions handled locally by
/// the decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderStats {
    pub command_frames: u64,
    pub address_frames: u64,
    pub incomplete_frames: u64,
    /// Byte transfers seen with no transaction open.
    pub orphan_bytes: u64,
    /// Pending register accesses discarded by a new chip select.
    pub abandoned: u64,
    /// Direct accesses ended by deselect before their data byte.
    pub incomplete: u64,
    /// Emitted frames whose opcode or register has no mnemonic.
    pub unmapped_symbols: u64,
}

impl DecoderStats {
    pub fn frames(&self) -> u64 {
        self.command_frames + self.address_frames + self.incomplete_frames
    }
}
