// trf7970a-rs/trf7970a/src/protocol/symbols.rs
//! Mnemonics for direct commands and register addresses, indexed by their
//! 5-bit code. Codes without an entry resolve to the `?` placeholder.

use crate::constants::{CODE_SPACE, UNMAPPED_PLACEHOLDER};
use crate::types::{CommandOpcode, RegisterAddress};

/// Direct command mnemonics.
pub const COMMAND_NAMES: [Option<&str>; CODE_SPACE] = [
    Some("IDLE"),                              // 0x00
    None,                                      // 0x01
    None,                                      // 0x02
    Some("SOFT_INIT"),                         // 0x03
    Some("INITIAL_RF_COLLISION_AVOID"),        // 0x04
    Some("PERFORM_RES_RF_COLLISION_AVOID"),    // 0x05
    Some("PERFORM_RES_RF_COLLISION_AVOID_N0"), // 0x06
    None,                                      // 0x07
    None,                                      // 0x08
    None,                                      // 0x09
    None,                                      // 0x0a
    None,                                      // 0x0b
    None,                                      // 0x0c
    None,                                      // 0x0d
    None,                                      // 0x0e
    Some("RESET_FIFO"),                        // 0x0f
    Some("TRANSMIT_NO_CRC"),                   // 0x10
    Some("TRANSMIT_CRC"),                      // 0x11
    Some("DELAY_TRANSMIT_NO_CRC"),             // 0x12
    Some("DELAY_TRANSMIT_CRC"),                // 0x13
    Some("TRANSMIT_NEXT_SLOT"),                // 0x14
    Some("CLOSE_SLOT_SEQUENCE"),               // 0x15
    Some("STOP_DECODERS"),                     // 0x16
    Some("RUN_DECODERS"),                      // 0x17
    Some("TEST_INTERNAL_RF"),                  // 0x18
    Some("TEST_EXTERNAL_RF"),                  // 0x19
    Some("RX_ADJUST_GAIN"),                    // 0x1a
    None,                                      // 0x1b
    None,                                      // 0x1c
    None,                                      // 0x1d
    None,                                      // 0x1e
    None,                                      // 0x1f
];

/// Register names. 0x12, 0x13 and 0x15
/// are reserved.
pub const REGISTER_NAMES: [Option<&str>; CODE_SPACE] = [
    Some("CHIP_STATUS_CTRL"),        // 0x00
    Some("ISO_CONTROL"),             // 0x01
    Some("ISO14443B_OPTIONS"),       // 0x02
    Some("ISO14443A_OPTIONS"),       // 0x03
    Some("TX_TIMER_EPC_HIGH"),       // 0x04
    Some("TX_TIMER_EPC"),            // 0x05
    Some("TX_PULSE_LENGTH_CTRL"),    // 0x06
    Some("RX_NO_RESPONSE_WAIT"),     // 0x07
    Some("RX_WAIT_TIME"),            // 0x08
    Some("MODULATOR_CONTROL"),       // 0x09
    Some("RX_SPECIAL_SETTINGS"),     // 0x0a
    Some("REGULATOR_CONTROL"),       // 0x0b
    Some("IRQ_STATUS"),              // 0x0c
    Some("IRQ_MASK"),                // 0x0d
    Some("COLLISION_POSITION"),      // 0x0e
    Some("RSSI_LEVEL"),              // 0x0f
    Some("SPECIAL_FUNC_1"),          // 0x10
    Some("SPECIAL_FUNC_2"),          // 0x11
    None,                            // 0x12
    None,                            // 0x13
    Some("FIFO_IRQ_LEVEL"),          // 0x14
    None,                            // 0x15
    Some("NFC_LOW_DETECTION_LEVEL"), // 0x16
    Some("NFC_ID"),                  // 0x17
    Some("NFC_TARGET_LEVEL"),        // 0x18
    Some("NFC_TARGET_PROTOCOL"),     // 0x19
    Some("TEST_SETTING1"),           // 0x1a
    Some("TEST_SETTING2"),           // 0x1b
    Some("FIFO_STATUS"),             // 0x1c
    Some("TX_LENGTH_BYTE1"),         // 0x1d
    Some("TX_LENGTH_BYTE2"),         // 0x1e
    Some("FIFO"),                    // 0x1f
];

pub fn command_name(opcode: CommandOpcode) -> Option<&'static str> {
    COMMAND_NAMES[opcode.as_u8() as usize]
}

pub fn register_name(register: RegisterAddress) -> Option<&'static str> {
    REGISTER_NAMES[register.as_u8() as usize]
}

/// Mnemonic or the `?` placeholder.
pub fn command_label(opcode: CommandOpcode) -> &'static str {
    command_name(opcode).unwrap_or(UNMAPPED_PLACEHOLDER)
}

/// Register name or the `?` placeholder.
pub fn register_label(register: RegisterAddress) -> &'static str {
    register_name(register).unwrap_or(UNMAPPED_PLACEHOLDER)
}
