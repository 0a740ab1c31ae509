// trf7970a-rs/trf7970a/src/protocol/frame.rs

use std::fmt;

use crate::constants::{INCOMPLETE_SUFFIX, SYMBOL_SEPARATOR};
use crate::protocol::instruction::AddressInstruction;
use crate::protocol::symbols::{command_label, command_name, register_label, register_name};
use crate::types::{CommandOpcode, Timespan};
use crate::utils::{byte_token, bytes_to_tokens};

/// One decoded, time-bounded protocol event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub span: Timespan,
    pub kind: FrameKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    /// One-byte direct command.
    Command { opcode: CommandOpcode },
    /// Completed register access with the bytes moved on the data line.
    Address {
        instruction: AddressInstruction,
        data: Vec<u8>,
    },
    /// Register access cut short by a bus boundary. Only produced when the
    /// decoder is configured to report incomplete transactions.
    Incomplete {
        instruction: AddressInstruction,
        data: Vec<u8>,
    },
}

/// Display strings for a frame, as shown by a host analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameFields {
    Command {
        command: String,
    },
    Address {
        command: String,
        address: String,
        data: String,
    },
}

impl Frame {
    pub fn command(opcode: CommandOpcode, span: Timespan) -> Self {
        Self {
            span,
            kind: FrameKind::Command { opcode },
        }
    }

    pub fn address(instruction: AddressInstruction, data: Vec<u8>, span: Timespan) -> Self {
        Self {
            span,
            kind: FrameKind::Address { instruction, data },
        }
    }

    pub fn incomplete(instruction: AddressInstruction, data: Vec<u8>, span: Timespan) -> Self {
        Self {
            span,
            kind: FrameKind::Incomplete { instruction, data },
        }
    }

    /// Data bytes carried by an address frame; empty for commands.
    pub fn data(&self) -> &[u8] {
        match &self.kind {
            FrameKind::Command { .. } => &[],
            FrameKind::Address { data, .. } | FrameKind::Incomplete { data, .. } => data.as_slice(),
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self.kind, FrameKind::Incomplete { .. })
    }

    /// True when the opcode or register has no entry in the symbol tables.
    pub fn has_unmapped_symbol(&self) -> bool {
        match &self.kind {
            FrameKind::Command { opcode } => command_name(*opcode).is_none(),
            FrameKind::Address { instruction, .. } | FrameKind::Incomplete { instruction, .. } => {
                register_name(instruction.register).is_none()
            }
        }
    }

    /// Resolve the frame into its display fields.
    pub fn fields(&self) -> FrameFields {
        match &self.kind {
            FrameKind::Command { opcode } => FrameFields::Command {
                command: format!(
                    "{}{}{}",
                    byte_token(opcode.as_u8()),
                    SYMBOL_SEPARATOR,
                    command_label(*opcode)
                ),
            },
            FrameKind::Address { instruction, data } => {
                address_fields(instruction, data, instruction.label().to_string())
            }
            FrameKind::Incomplete { instruction, data } => address_fields(
                instruction,
                data,
                format!("{}{}", instruction.label(), INCOMPLETE_SUFFIX),
            ),
        }
    }
}

fn address_fields(instruction: &AddressInstruction, data: &[u8], command: String) -> FrameFields {
    FrameFields::Address {
        command,
        address: format!(
            "{}{}{}",
            byte_token(instruction.register.as_u8()),
            SYMBOL_SEPARATOR,
            register_label(instruction.register)
        ),
        data: bytes_to_tokens(data),
    }
}

impl FrameFields {
    /// The `command` field, present on every frame type.
    pub fn command(&self) -> &str {
        match self {
            Self::Command { command } | Self::Address { command, .. } => command,
        }
    }
}

impl fmt::Display for FrameFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { command } => write!(f, "CMD {}", command),
            Self::Address {
                command,
                address,
                data,
            } => write!(f, "{} @ {} [ {}]", command, address, data),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fields(), f)
    }
}
