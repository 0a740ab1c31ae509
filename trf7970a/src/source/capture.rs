// trf7970a-rs/trf7970a/src/source/capture.rs

//! Synthesize bus event streams from high-level TRF7970A transactions.
//!
//! Timestamps increase monotonically: every byte takes `byte_ticks`, and
//! `gap_ticks` separate chip select edges from the surrounding bytes.

use crate::protocol::{AddressInstruction, BusEvent};
use crate::source::scripted::ScriptedSource;
use crate::types::{AddressMode, CommandOpcode, Operation, RegisterAddress, Timestamp};

pub const DEFAULT_BYTE_TICKS: u64 = 8;
pub const DEFAULT_GAP_TICKS: u64 = 2;

#[derive(Debug, Clone)]
pub struct CaptureBuilder {
    events: Vec<BusEvent>,
    now: u64,
    byte_ticks: u64,
    gap_ticks: u64,
}

impl Default for CaptureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBuilder {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            now: 0,
            byte_ticks: DEFAULT_BYTE_TICKS,
            gap_ticks: DEFAULT_GAP_TICKS,
        }
    }

    pub fn byte_ticks(mut self, ticks: u64) -> Self {
        self.byte_ticks = ticks;
        self
    }

    pub fn gap_ticks(mut self, ticks: u64) -> Self {
        self.gap_ticks = ticks;
        self
    }

    /// Current time: the end of the last emitted event.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.now)
    }

    pub fn select(mut self) -> Self {
        self.events.push(BusEvent::Select);
        self.now += self.gap_ticks;
        self
    }

    pub fn transfer(mut self, mosi: u8, miso: u8) -> Self {
        let start = Timestamp::new(self.now);
        self.now += self.byte_ticks;
        self.events
            .push(BusEvent::byte_transfer(mosi, miso, start, Timestamp::new(self.now)));
        self
    }

    pub fn deselect(mut self) -> Self {
        self.now += self.gap_ticks;
        self.events.push(BusEvent::deselect(Timestamp::new(self.now)));
        self
    }

    /// One complete transaction of raw `(mosi, miso)` byte pairs.
    pub fn transaction(self, bytes: &[(u8, u8)]) -> Self {
        bytes
            .iter()
            .fold(self.select(), |b, &(mosi, miso)| b.transfer(mosi, miso))
            .deselect()
    }

    /// Direct command in its own transaction.
    pub fn command(self, opcode: CommandOpcode) -> Self {
        self.transaction(&[(opcode.to_byte(), 0x00)])
    }

    pub fn write_register(self, register: RegisterAddress, value: u8) -> Self {
        self.write_registers(&[(register, value)])
    }

    /// Several direct writes sharing one chip select window.
    pub fn write_registers(self, writes: &[(RegisterAddress, u8)]) -> Self {
        let bytes: Vec<(u8, u8)> = writes
            .iter()
            .flat_map(|&(register, value)| {
                let instr = AddressInstruction::new(Operation::Write, AddressMode::Direct, register);
                [(instr.to_byte(), 0x00), (value, 0x00)]
            })
            .collect();
        self.transaction(&bytes)
    }

    /// Direct read; the chip answers `value` on MISO.
    pub fn read_register(self, register: RegisterAddress, value: u8) -> Self {
        let instr = AddressInstruction::new(Operation::Read, AddressMode::Direct, register);
        self.transaction(&[(instr.to_byte(), 0x00), (0x00, value)])
    }

    pub fn burst_write(self, register: RegisterAddress, data: &[u8]) -> Self {
        let instr = AddressInstruction::new(Operation::Write, AddressMode::Continuous, register);
        let bytes: Vec<(u8, u8)> = std::iter::once((instr.to_byte(), 0x00))
            .chain(data.iter().map(|&b| (b, 0x00)))
            .collect();
        self.transaction(&bytes)
    }

    pub fn burst_read(self, register: RegisterAddress, data: &[u8]) -> Self {
        let instr = AddressInstruction::new(Operation::Read, AddressMode::Continuous, register);
        let bytes: Vec<(u8, u8)> = std::iter::once((instr.to_byte(), 0x00))
            .chain(data.iter().map(|&b| (0x00, b)))
            .collect();
        self.transaction(&bytes)
    }

    pub fn build(self) -> Vec<BusEvent> {
        self.events
    }

    pub fn into_source(self) -> ScriptedSource {
        ScriptedSource::new(self.events)
    }
}
