// trf7970a-rs/trf7970a/src/types.rs

use crate::constants::{CODE_MASK, COMMAND_FLAG, CONTINUOUS_FLAG, READ_FLAG};
use crate::{Error, Result};
use derive_more::{Display, From, Into};
use std::convert::TryFrom;

/// Timestamp - Newtype Pattern (abstract ticks; the unit is chosen by the
/// transport layer that produced the events)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    pub fn ticks(&self) -> u64 {
        self.0
    }
}

/// Closed time interval covered by a decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timespan {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Timespan {
    /// Checked constructor: `end` must not precede `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidTimespan {
                start: start.ticks(),
                end: end.ticks(),
            });
        }
        Ok(Self { start, end })
    }

    /// Length of the interval in ticks. Saturates at zero for spans that
    /// were built from out-of-order events.
    pub fn duration(&self) -> u64 {
        self.end.ticks().saturating_sub(self.start.ticks())
    }
}

/// Register access direction (instruction bit 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    #[display(fmt = "WRITE")]
    Write,
    #[display(fmt = "READ")]
    Read,
}

impl Operation {
    pub fn from_instruction(byte: u8) -> Self {
        if byte & READ_FLAG != 0 {
            Self::Read
        } else {
            Self::Write
        }
    }

    /// Pick the line carrying the data for this direction: the chip drives
    /// MISO on reads, the host drives MOSI on writes.
    pub fn data_line(&self, mosi: u8, miso: u8) -> u8 {
        match self {
            Self::Read => miso,
            Self::Write => mosi,
        }
    }
}

/// Register addressing mode (instruction bit 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressMode {
    /// Exactly one data byte follows the instruction.
    Direct,
    /// Data bytes follow until chip select is released.
    Continuous,
}

impl AddressMode {
    pub fn from_instruction(byte: u8) -> Self {
        if byte & CONTINUOUS_FLAG != 0 {
            Self::Continuous
        } else {
            Self::Direct
        }
    }
}

/// CommandOpcode - 5-bit direct command code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:#04x}", _0)]
pub struct CommandOpcode(u8);

impl CommandOpcode {
    pub const IDLE: Self = Self(0x00);
    pub const SOFT_INIT: Self = Self(0x03);
    pub const RESET_FIFO: Self = Self(0x0f);
    pub const TRANSMIT_CRC: Self = Self(0x11);

    /// Build an opcode from its low five bits; higher bits are discarded.
    pub const fn new(code: u8) -> Self {
        Self(code & CODE_MASK)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Instruction byte as sent on MOSI (command flag set).
    pub fn to_byte(&self) -> u8 {
        COMMAND_FLAG | self.0
    }
}

impl TryFrom<u8> for CommandOpcode {
    type Error = Error;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        if byte & COMMAND_FLAG == 0 {
            return Err(Error::NotACommand(byte));
        }
        Ok(Self::new(byte))
    }
}

/// RegisterAddress - 5-bit register address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{:#04x}", _0)]
pub struct RegisterAddress(u8);

impl RegisterAddress {
    pub const CHIP_STATUS_CTRL: Self = Self(0x00);
    pub const IRQ_STATUS: Self = Self(0x0c);
    pub const FIFO_STATUS: Self = Self(0x1c);
    pub const FIFO: Self = Self(0x1f);

    /// Build an address from its low five bits; higher bits are discarded.
    pub const fn new(address: u8) -> Self {
        Self(address & CODE_MASK)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}
