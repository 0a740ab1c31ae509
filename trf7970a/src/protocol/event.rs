// trf7970a-rs/trf7970a/src/protocol/event.rs

use crate::types::Timestamp;

/// One event delivered by the SPI transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusEvent {
    /// Chip enable asserted: a transaction starts.
    Select,
    /// One clocked byte exchanged on both data lines.
    ByteTransfer {
        mosi: u8,
        miso: u8,
        start: Timestamp,
        end: Timestamp,
    },
    /// Chip enable released: the transaction ends, possibly mid-burst.
    Deselect { end: Timestamp },
}

impl BusEvent {
    pub fn byte_transfer(mosi: u8, miso: u8, start: Timestamp, end: Timestamp) -> Self {
        Self::ByteTransfer {
            mosi,
            miso,
            start,
            end,
        }
    }

    pub fn deselect(end: Timestamp) -> Self {
        Self::Deselect { end }
    }

    /// Latest timestamp carried by the event, if any.
    pub fn end_time(&self) -> Option<Timestamp> {
        match self {
            Self::Select => None,
            Self::ByteTransfer { end, .. } | Self::Deselect { end } => Some(*end),
        }
    }
}
