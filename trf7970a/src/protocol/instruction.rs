// trf7970a-rs/trf7970a/src/protocol/instruction.rs

use crate::constants::{COMMAND_FLAG, CONTINUOUS_FLAG, READ_FLAG};
use crate::types::{AddressMode, CommandOpcode, Operation, RegisterAddress};
use crate::{Error, Result};

/// Register access decoded from an instruction byte with bit 7 clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressInstruction {
    pub operation: Operation,
    pub mode: AddressMode,
    pub register: RegisterAddress,
}

impl AddressInstruction {
    pub fn new(operation: Operation, mode: AddressMode, register: RegisterAddress) -> Self {
        Self {
            operation,
            mode,
            register,
        }
    }

    /// Decode the operation, mode and register fields. The command flag is
    /// not checked here; see `TryFrom<u8>` for the strict form.
    pub fn decode(byte: u8) -> Self {
        Self {
            operation: Operation::from_instruction(byte),
            mode: AddressMode::from_instruction(byte),
            register: RegisterAddress::new(byte),
        }
    }

    /// Encode back into the instruction byte sent on MOSI.
    pub fn to_byte(&self) -> u8 {
        let mut byte = self.register.as_u8();
        if self.operation == Operation::Read {
            byte |= READ_FLAG;
        }
        if self.mode == AddressMode::Continuous {
            byte |= CONTINUOUS_FLAG;
        }
        byte
    }

    /// Operation label shown for the frame: `READ`, `WRITE`, `READ(c)` or
    /// `WRITE(c)` where `(c)` marks continuous mode.
    pub fn label(&self) -> &'static str {
        match (self.operation, self.mode) {
            (Operation::Read, AddressMode::Direct) => "READ",
            (Operation::Write, AddressMode::Direct) => "WRITE",
            (Operation::Read, AddressMode::Continuous) => "READ(c)",
            (Operation::Write, AddressMode::Continuous) => "WRITE(c)",
        }
    }

    pub fn is_continuous(&self) -> bool {
        self.mode == AddressMode::Continuous
    }
}

impl TryFrom<u8> for AddressInstruction {
    type Error = Error;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        if byte & COMMAND_FLAG != 0 {
            return Err(Error::NotAnAddress(byte));
        }
        Ok(Self::decode(byte))
    }
}

/// First byte of a transaction, classified by its top bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Self-contained one-byte command, no data phase.
    Command(CommandOpcode),
    /// Register access followed by a data phase.
    Address(AddressInstruction),
}

impl Instruction {
    /// Classify an instruction byte. Every byte value is a valid instruction.
    pub fn classify(byte: u8) -> Self {
        if byte & COMMAND_FLAG != 0 {
            Self::Command(CommandOpcode::new(byte))
        } else {
            Self::Address(AddressInstruction::decode(byte))
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }

    pub fn to_byte(&self) -> u8 {
        match self {
            Self::Command(op) => op.to_byte(),
            Self::Address(addr) => addr.to_byte(),
        }
    }
}

impl From<u8> for Instruction {
    fn from(byte: u8) -> Self {
        Self::classify(byte)
    }
}

/// Strictly decode a command byte, rejecting register accesses.
pub fn expect_command(byte: u8) -> Result<CommandOpcode> {
    CommandOpcode::try_from(byte)
}
