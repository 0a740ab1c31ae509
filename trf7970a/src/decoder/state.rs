// trf7970a-rs/trf7970a/src/decoder/state.rs

use crate::protocol::{AddressInstruction, Frame};
use crate::types::{Timespan, Timestamp};

/// Decoder state. Per-transaction data only exists inside
/// `AccumulatingData`, so it cannot be observed outside a register access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DecoderState {
    /// No transaction open; waiting for chip select.
    #[default]
    Idle,
    /// Transaction open; the next byte is an instruction byte.
    AwaitingInstruction,
    /// Register access in progress; following bytes are data.
    AccumulatingData(PendingTransaction),
}

impl DecoderState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn pending(&self) -> Option<&PendingTransaction> {
        match self {
            Self::AccumulatingData(pending) => Some(pending),
            _ => None,
        }
    }
}

/// Register access waiting for its data bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    instruction: AddressInstruction,
    started_at: Timestamp,
    last_seen: Timestamp,
    data: Vec<u8>,
}

impl PendingTransaction {
    pub(crate) fn new(instruction: AddressInstruction, started_at: Timestamp, last_seen: Timestamp) -> Self {
        Self {
            instruction,
            started_at,
            last_seen,
            data: Vec::new(),
        }
    }

    pub fn instruction(&self) -> &AddressInstruction {
        &self.instruction
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// End time of the most recent byte belonging to this transaction.
    pub fn last_seen(&self) -> Timestamp {
        self.last_seen
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Append the byte from the line that carries data for this operation.
    pub(crate) fn collect(&mut self, mosi: u8, miso: u8, end: Timestamp) {
        self.data.push(self.instruction.operation.data_line(mosi, miso));
        self.last_seen = end;
    }

    fn span_to(&self, end: Timestamp) -> Timespan {
        Timespan {
            start: self.started_at,
            end,
        }
    }

    pub(crate) fn into_frame(self, end: Timestamp) -> Frame {
        let span = self.span_to(end);
        Frame::address(self.instruction, self.data, span)
    }

    pub(crate) fn into_incomplete(self, end: Timestamp) -> Frame {
        let span = self.span_to(end);
        Frame::incomplete(self.instruction, self.data, span)
    }
}
