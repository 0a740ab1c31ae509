// trf7970a-rs/trf7970a/src/protocol/mod.rs

pub mod event;
pub mod frame;
pub mod instruction;
pub mod symbols;

pub use event::BusEvent;
pub use frame::{Frame, FrameFields, FrameKind};
pub use instruction::{AddressInstruction, Instruction};
pub use symbols::{command_label, command_name, register_label, register_name};
