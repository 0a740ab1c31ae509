// trf7970a-rs/trf7970a/src/constants.rs
//! Bit layout of the TRF7970A instruction byte and shared display constants

/// Bit 7: set for a one-byte command, clear for a register access
pub const COMMAND_FLAG: u8 = 0x80;

/// Bit 6 of an address instruction: set for read, clear for write
pub const READ_FLAG: u8 = 0x40;

/// Bit 5 of an address instruction: set for continuous (burst) mode
pub const CONTINUOUS_FLAG: u8 = 0x20;

/// Low five bits carry the command opcode or register address
pub const CODE_MASK: u8 = 0x1F;

/// Number of distinct 5-bit codes
pub const CODE_SPACE: usize = 32;

/// Display placeholder for opcodes and registers missing from the symbol tables
pub const UNMAPPED_PLACEHOLDER: &str = "?";

/// Separator between a hex code and its mnemonic, e.g. `0x03 - SOFT_INIT`
pub const SYMBOL_SEPARATOR: &str = " - ";

/// Suffix applied to the operation label of incomplete transactions
pub const INCOMPLETE_SUFFIX: &str = " (incomplete)";
