use trf7970a::prelude::*;

#[test]
fn classify_round_trips_through_to_byte() {
    for byte in 0u8..=0xff {
        let instr = Instruction::classify(byte);
        match instr {
            // Command bytes lose their 0x40/0x20 bits
            Instruction::Command(op) => assert_eq!(op.to_byte(), 0x80 | (byte & 0x1f)),
            Instruction::Address(_) => assert_eq!(instr.to_byte(), byte),
        }
    }
}

#[test]
fn strict_conversions_reject_wrong_class() {
    assert_eq!(CommandOpcode::try_from(0x45), Err(Error::NotACommand(0x45)));
    assert_eq!(AddressInstruction::try_from(0x91), Err(Error::NotAnAddress(0x91)));
    assert_eq!(
        AddressInstruction::try_from(0x31).unwrap().label(),
        "WRITE(c)"
    );
}
